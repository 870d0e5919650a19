use std::fmt::Debug;
use std::hash::Hash;

use crate::error::WidthError;
use crate::hypergraph::Hypergraph;
use crate::lp::edge_cover::solve_for_target;

/// Tolerance within which two TD widths are considered tied for the
/// purposes of the §4.4 tie-break rule.
const TOLERANCE: f64 = 1e-6;

/// Fractional hypertree width of `hypergraph` (§4): the minimum, over every
/// tree decomposition, of the maximum fractional edge cover number taken
/// over that decomposition's bags.
///
/// Ties within [`TOLERANCE`] are broken by preferring the TD with fewer
/// bags (§4.4), so the TD selected — and hence the width returned — is
/// fully determined by `hypergraph.tds()`'s order rather than by
/// incidental floating-point noise between near-equal LP solves.
///
/// A hypergraph with no tree decompositions (only possible when it has no
/// vertices) has width `0.0` by convention.
pub fn fractional_hypertree_width<V: Clone + Eq + Hash + Ord + Debug>(
    hypergraph: &Hypergraph<V>,
) -> Result<f64, WidthError> {
    let mut best: Option<(f64, usize)> = None;
    for td in hypergraph.tds() {
        let mut worst_bag = 0.0_f64;
        for &bag in td.bags() {
            let cover = solve_for_target(hypergraph.edges_raw(), hypergraph.weights(), bag)?;
            worst_bag = worst_bag.max(cover);
        }
        let bag_count = td.bags().len();
        best = Some(match best {
            Some((best_width, best_bags)) => {
                if worst_bag < best_width - TOLERANCE {
                    (worst_bag, bag_count)
                } else if worst_bag <= best_width + TOLERANCE && bag_count < best_bags {
                    (worst_bag, bag_count)
                } else {
                    (best_width, best_bags)
                }
            }
            None => (worst_bag, bag_count),
        });
    }
    Ok(best.map(|(width, _)| width).unwrap_or(0.0))
}
