use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::OnceLock;

use log::debug;

use crate::bag::Bag;
use crate::error::WidthError;
use crate::lp::edge_cover;
use crate::subset::Subset;
use crate::td::{self, TreeDecomposition};

/// A query hypergraph over caller-supplied vertex identifiers `V` (§3).
///
/// `V` is never interpreted beyond equality, hashing, ordering (used only to
/// produce a deterministic vertex index assignment and canonical bag
/// rendering) and printing; the core otherwise treats it as opaque.
///
/// Constructed once and immutable afterward. Tree decompositions are
/// computed lazily from `edges` on first access and cached for the
/// hypergraph's lifetime, unless supplied explicitly at construction.
pub struct Hypergraph<V> {
    vars: Vec<V>,
    edges: Vec<Subset>,
    weights: Vec<f64>,
    var_index: HashMap<V, usize>,
    var_edges: Vec<Vec<usize>>,
    tds: OnceLock<Vec<TreeDecomposition>>,
}

impl<V: Clone + Eq + Hash + Ord + fmt::Debug> Hypergraph<V> {
    /// Constructs and validates a hypergraph (§3, §6 `make_hypergraph`).
    ///
    /// `weights` defaults to `1.0` per edge when omitted; `tds` defaults to
    /// [`crate::enumerate_tds`] computed lazily on first use. Any violated
    /// invariant (duplicate vertices, an edge referencing an unknown or
    /// duplicate vertex, an edge not covering every vertex, a mismatched or
    /// negative weight) aborts construction with [`WidthError::Config`]. A
    /// vertex count beyond [`Subset::MAX_VARS`] aborts with
    /// [`WidthError::Logic`], since every bag and LP constraint downstream
    /// is addressed through that codec.
    pub fn new(
        vars: Vec<V>,
        edges: Vec<Vec<V>>,
        weights: Option<Vec<f64>>,
        tds: Option<Vec<TreeDecomposition>>,
    ) -> Result<Self, WidthError> {
        let n = vars.len();
        if n > Subset::MAX_VARS {
            return Err(WidthError::logic(format!(
                "hypergraph has {n} vertices, exceeding the subset codec's {}-bit capacity",
                Subset::MAX_VARS
            )));
        }

        let mut var_index = HashMap::with_capacity(n);
        for (i, v) in vars.iter().enumerate() {
            if var_index.insert(v.clone(), i).is_some() {
                return Err(WidthError::config(format!("duplicate vertex {v:?}")));
            }
        }

        if edges.is_empty() && n > 0 {
            return Err(WidthError::config(
                "hyperedges must cover every vertex, but no hyperedges were given",
            ));
        }

        let mut encoded_edges = Vec::with_capacity(edges.len());
        let mut covered = Subset::empty();
        for edge in &edges {
            if edge.is_empty() {
                return Err(WidthError::config("hyperedges must be nonempty"));
            }
            let mut seen = HashSet::with_capacity(edge.len());
            let mut subset = Subset::empty();
            for v in edge {
                let idx = *var_index
                    .get(v)
                    .ok_or_else(|| WidthError::config(format!("hyperedge references unknown vertex {v:?}")))?;
                if !seen.insert(idx) {
                    return Err(WidthError::config(format!("hyperedge contains duplicate vertex {v:?}")));
                }
                subset.insert(idx);
            }
            covered = covered.union(subset);
            encoded_edges.push(subset);
        }
        if covered != Subset::full(n) {
            return Err(WidthError::config("union of hyperedges does not cover every vertex"));
        }

        let weights = match weights {
            Some(w) => {
                if w.len() != encoded_edges.len() {
                    return Err(WidthError::config("weights length must match edge count"));
                }
                if w.iter().any(|&x| x < 0.0) {
                    return Err(WidthError::config("edge weights must be nonnegative"));
                }
                w
            }
            None => vec![1.0; encoded_edges.len()],
        };

        let mut var_edges = vec![Vec::new(); n];
        for (j, edge) in encoded_edges.iter().enumerate() {
            for idx in edge.iter() {
                var_edges[idx].push(j);
            }
        }

        let tds_cache = OnceLock::new();
        if let Some(given) = tds {
            tds_cache
                .set(given)
                .unwrap_or_else(|_| unreachable!("freshly constructed OnceLock is always empty"));
        }

        debug!(
            "constructed hypergraph with {n} vertices and {} hyperedges",
            encoded_edges.len()
        );

        Ok(Hypergraph {
            vars,
            edges: encoded_edges,
            weights,
            var_index,
            var_edges,
            tds: tds_cache,
        })
    }

    /// The tree decompositions of this hypergraph (§4.2), computing and
    /// caching them on first access if none were supplied at construction.
    pub fn tds(&self) -> &[TreeDecomposition] {
        self.tds
            .get_or_init(|| td::enumerate_tds_raw(&self.edges, self.vars.len()))
    }

    pub fn vars(&self) -> &[V] {
        &self.vars
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn nr_vars(&self) -> usize {
        self.vars.len()
    }

    pub fn var_index(&self, v: &V) -> Option<usize> {
        self.var_index.get(v).copied()
    }

    /// Indices of the hyperedges incident to vertex index `index`.
    pub fn var_edges(&self, index: usize) -> &[usize] {
        &self.var_edges[index]
    }

    pub(crate) fn edges_raw(&self) -> &[Subset] {
        &self.edges
    }

    /// Encodes a caller-supplied vertex list into the subset codec (§4.1,
    /// §10.6). Errors if any member is not part of this hypergraph.
    pub fn encode_subset(&self, members: &[V]) -> Result<Subset, WidthError> {
        let mut subset = Subset::empty();
        for v in members {
            let idx = self
                .var_index(v)
                .ok_or_else(|| WidthError::config(format!("vertex {v:?} is not part of this hypergraph")))?;
            subset.insert(idx);
        }
        Ok(subset)
    }

    /// The subset containing every vertex of this hypergraph.
    pub fn full_subset(&self) -> Subset {
        Subset::full(self.nr_vars())
    }

    /// Decodes a subset back into the sorted list of original vertex
    /// identifiers it contains (§10.6).
    pub fn decode_bag(&self, subset: Subset) -> Bag<V> {
        let mut vertices: Vec<V> = subset.iter().map(|idx| self.vars[idx].clone()).collect();
        vertices.sort();
        Bag::new(vertices)
    }

    /// Minimum weighted fractional edge cover of `target` (default: every
    /// vertex), §4.3. Thin public wrapper over the crate-private LP routine
    /// in [`crate::lp::edge_cover`] (§10.6).
    pub fn fractional_edge_cover(&self, target: Option<&[V]>) -> Result<f64, WidthError> {
        edge_cover::fractional_edge_cover(self, target)
    }

    /// Every subset of `target`, in ascending raw-bitmask order (§10.6).
    ///
    /// Exposes the same sub-lattice walk [`crate::lp::entropy::solve`] does
    /// internally over the full vertex set, so a caller assembling its own
    /// diagnostics over a bag's entropy lattice doesn't have to re-derive the
    /// enumeration.
    pub fn subsets_of(&self, target: Subset) -> Vec<Subset> {
        (0..=target.raw())
            .map(Subset::from_raw)
            .filter(|s| s.is_subset(target))
            .collect()
    }
}

impl<V: Clone> Clone for Hypergraph<V> {
    fn clone(&self) -> Self {
        let tds = OnceLock::new();
        if let Some(cached) = self.tds.get() {
            let _ = tds.set(cached.clone());
        }
        Hypergraph {
            vars: self.vars.clone(),
            edges: self.edges.clone(),
            weights: self.weights.clone(),
            var_index: self.var_index.clone(),
            var_edges: self.var_edges.clone(),
            tds,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Hypergraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hypergraph")
            .field("vars", &self.vars)
            .field("edges", &self.edges)
            .field("weights", &self.weights)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_vertex_count_beyond_subset_capacity() {
        let n = Subset::MAX_VARS + 1;
        let vars: Vec<i32> = (0..n as i32).collect();
        let err = Hypergraph::new(vars, vec![(0..n as i32).collect()], None, None).unwrap_err();
        assert!(matches!(err, WidthError::Logic(_)));
    }

    #[test]
    fn rejects_duplicate_vertices() {
        let err = Hypergraph::new(vec![1, 1], vec![vec![1]], None, None).unwrap_err();
        assert!(matches!(err, WidthError::Config(_)));
    }

    #[test]
    fn rejects_edge_not_covering_every_vertex() {
        let err = Hypergraph::new(vec![1, 2], vec![vec![1]], None, None).unwrap_err();
        assert!(matches!(err, WidthError::Config(_)));
    }

    #[test]
    fn rejects_unknown_vertex_in_edge() {
        let err = Hypergraph::new(vec![1, 2], vec![vec![1, 3]], None, None).unwrap_err();
        assert!(matches!(err, WidthError::Config(_)));
    }

    #[test]
    fn rejects_negative_weight() {
        let err = Hypergraph::new(vec![1, 2], vec![vec![1, 2]], Some(vec![-1.0]), None).unwrap_err();
        assert!(matches!(err, WidthError::Config(_)));
    }

    #[test]
    fn defaults_weights_to_one() {
        let h = Hypergraph::new(vec![1, 2], vec![vec![1, 2]], None, None).unwrap();
        assert_eq!(h.weights(), &[1.0]);
    }

    #[test]
    fn subsets_of_enumerates_the_sub_lattice() {
        let h = Hypergraph::new(vec![1, 2, 3], vec![vec![1, 2], vec![2, 3]], None, None).unwrap();
        let target = h.encode_subset(&[1, 2]).unwrap();
        let subsets = h.subsets_of(target);
        assert_eq!(subsets.len(), 4);
        for s in &subsets {
            assert!(s.is_subset(target));
        }
        assert!(subsets.contains(&Subset::empty()));
        assert!(subsets.contains(&target));
    }

    #[test]
    fn encode_decode_round_trip() {
        let h = Hypergraph::new(vec!['a', 'b', 'c'], vec![vec!['a', 'b'], vec!['b', 'c']], None, None).unwrap();
        let subset = h.encode_subset(&['c', 'a']).unwrap();
        let bag = h.decode_bag(subset);
        assert_eq!(bag.vertices(), &['a', 'c']);
    }
}
