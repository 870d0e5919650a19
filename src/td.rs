use itertools::Itertools;

use crate::subset::{canonicalize_bags, Subset};
use crate::subsumption::filter_dominated;

/// A tree decomposition of a hypergraph, represented by its set of bags
/// (§4.2). The running-intersection and connectivity conditions of the
/// classical definition are not checked here — TDs produced by
/// [`enumerate_tds_raw`] satisfy them by construction, since they come
/// straight out of a variable-elimination schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeDecomposition {
    bags: Vec<Subset>,
}

impl TreeDecomposition {
    #[cfg(test)]
    pub(crate) fn from_bags(bags: Vec<Subset>) -> Self {
        TreeDecomposition { bags }
    }

    pub fn bags(&self) -> &[Subset] {
        &self.bags
    }

    /// `true` iff for every bag `b2` of `other` there is a bag `b1` of
    /// `self` with `b2 ⊆ b1` (§4.2): `self`'s bags are at least as coarse
    /// everywhere `other`'s are, so `self` can only be worse or equal for
    /// the max-over-bags width computation, making it subsumed by `other`.
    fn dominated_by(&self, other: &TreeDecomposition) -> bool {
        other.bags.iter().all(|b2| self.bags.iter().any(|b1| b2.is_subset(*b1)))
    }
}

/// Runs the variable-elimination procedure of §4.2 over one permutation of
/// `0..n`, operating directly on the hyperedge set rather than on a derived
/// graph. `edges` is consumed as the initial working edge set `E′`.
fn eliminate(edges: &[Subset], order: &[usize]) -> Vec<Subset> {
    let mut working: Vec<Subset> = edges.to_vec();
    let mut bags = Vec::with_capacity(order.len());

    for &v in order {
        let incident: Vec<usize> = working
            .iter()
            .enumerate()
            .filter(|(_, e)| e.contains(v))
            .map(|(i, _)| i)
            .collect();
        if incident.is_empty() {
            continue;
        }

        let bag = incident.iter().fold(Subset::empty(), |acc, &i| acc.union(working[i]));
        bags.push(bag);

        working.retain(|e| !e.is_subset(bag));

        let remaining_union = working.iter().fold(Subset::empty(), |acc, &e| acc.union(e));
        let new_edge = bag.intersection(remaining_union);
        if !new_edge.is_empty() {
            working.push(new_edge);
        }
    }
    bags
}

/// Enumerates every tree decomposition obtainable from the variable
/// elimination procedure over some permutation of `0..n`, collects distinct
/// bag sets, then prunes those dominated by a non-equivalent other (§4.2):
/// ties in mutual subsumption are broken by dropping the higher list index.
///
/// Internal: operates on already index-encoded hyperedges, used both by
/// [`crate::Hypergraph::tds`] and directly by tests.
pub(crate) fn enumerate_tds_raw(edges: &[Subset], n: usize) -> Vec<TreeDecomposition> {
    if n == 0 {
        return vec![TreeDecomposition { bags: Vec::new() }];
    }

    let mut seen = std::collections::HashSet::new();
    let mut tds = Vec::new();
    for order in (0..n).permutations(n) {
        let mut bags = eliminate(edges, &order);
        canonicalize_bags(&mut bags);
        if seen.insert(bags.clone()) {
            tds.push(TreeDecomposition { bags });
        }
    }

    filter_dominated(tds, TreeDecomposition::dominated_by)
}

/// Public entry point: enumerates the tree decompositions of a hypergraph
/// built from `edges` over a vertex universe `0..n`, mirroring
/// [`crate::Hypergraph::tds`] for callers who want decompositions without
/// constructing a full [`crate::Hypergraph`] (§4.2, §6 `enumerate_tds`).
pub fn enumerate_tds(edges: &[Vec<usize>], n: usize) -> Vec<TreeDecomposition> {
    let encoded: Vec<Subset> = edges.iter().map(|e| Subset::from_indices(e.iter().copied())).collect();
    enumerate_tds_raw(&encoded, n)
}
