use std::fmt::Debug;
use std::hash::Hash;

use good_lp::{constraint, variable, Expression, ProblemVariables, Solution, SolverModel, Variable};

use crate::error::WidthError;
use crate::hypergraph::Hypergraph;
use crate::lp::map_resolution_error;
use crate::subset::Subset;

/// Minimum weighted fractional edge cover of `target` (default: every
/// vertex of `hypergraph`), §4.3.
///
/// `min sum_e w_e * x_e` subject to `x_e >= 0` and, for every vertex `v` in
/// `target`, `sum_{e ni v} x_e >= 1`: each targeted vertex must be covered,
/// fractionally, by the hyperedges incident to it.
pub(crate) fn fractional_edge_cover<V: Clone + Eq + Hash + Ord + Debug>(
    hypergraph: &Hypergraph<V>,
    target: Option<&[V]>,
) -> Result<f64, WidthError> {
    let target_subset = match target {
        Some(members) => hypergraph.encode_subset(members)?,
        None => hypergraph.full_subset(),
    };
    solve_for_target(hypergraph.edges_raw(), hypergraph.weights(), target_subset)
}

pub(crate) fn solve_for_target(edges: &[Subset], weights: &[f64], target: Subset) -> Result<f64, WidthError> {
    if target.is_empty() {
        return Ok(0.0);
    }

    let mut vars = ProblemVariables::new();
    let xs: Vec<Variable> = (0..edges.len()).map(|_| vars.add(variable().min(0.0))).collect();

    let objective: Expression = xs
        .iter()
        .zip(weights)
        .map(|(&x, &w)| w * x)
        .fold(Expression::from(0.0), |acc, term| acc + term);

    let mut model = vars.minimise(objective.clone()).using(good_lp::microlp);

    for v in target.iter() {
        if !edges.iter().any(|e| e.contains(v)) {
            return Err(WidthError::config(format!(
                "vertex index {v} is not covered by any hyperedge"
            )));
        }
        let coverage: Expression = xs
            .iter()
            .zip(edges)
            .filter(|(_, e)| e.contains(v))
            .map(|(&x, _)| x)
            .fold(Expression::from(0.0), |acc, term| acc + term);
        model = model.with(constraint!(coverage >= 1.0));
    }

    let solution = model.solve().map_err(map_resolution_error)?;
    Ok(solution.eval(objective))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(vs: &[usize]) -> Subset {
        Subset::from_indices(vs.iter().copied())
    }

    #[test]
    fn single_edge_covering_everything_costs_its_own_weight() {
        let edges = vec![edge(&[0, 1, 2])];
        let cost = solve_for_target(&edges, &[2.5], Subset::full(3)).unwrap();
        assert!((cost - 2.5).abs() < 1e-6);
    }

    #[test]
    fn two_disjoint_edges_both_needed() {
        let edges = vec![edge(&[0, 1]), edge(&[2, 3])];
        let cost = solve_for_target(&edges, &[1.0, 1.0], Subset::full(4)).unwrap();
        assert!((cost - 2.0).abs() < 1e-6);
    }

    #[test]
    fn overlapping_edges_allow_fractional_cover_below_two() {
        // A triangle's three edges: each vertex needs total weight >= 1 from
        // its two incident edges, and setting every x_e = 1/2 covers all
        // three vertices at total cost 1.5, strictly less than picking two
        // whole edges (cost 2).
        let edges = vec![edge(&[0, 1]), edge(&[1, 2]), edge(&[0, 2])];
        let cost = solve_for_target(&edges, &[1.0, 1.0, 1.0], Subset::full(3)).unwrap();
        assert!(cost < 2.0 - 1e-6);
        assert!((cost - 1.5).abs() < 1e-6);
    }

    #[test]
    fn uncovered_vertex_is_a_config_error() {
        let edges = vec![edge(&[0])];
        let err = solve_for_target(&edges, &[1.0], Subset::full(2)).unwrap_err();
        assert!(matches!(err, WidthError::Config(_)));
    }
}
