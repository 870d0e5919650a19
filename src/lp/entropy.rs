use good_lp::{constraint, variable, ProblemVariables, Solution, SolverModel, Variable};

use crate::error::WidthError;
use crate::lp::map_resolution_error;
use crate::subset::Subset;

/// Submodular width of a single selector (§5.2): the entropic relaxation of
/// "how much does covering every bag in this selector, using the given
/// hyperedges and functional dependencies, cost".
///
/// Introduces one entropy variable `h[U]` per subset `U` of the full vertex
/// set (the "Boolean-lattice" variables of §5.2), constrains them to satisfy
/// the elemental monotonicity and submodularity inequalities that any
/// Shannon entropy function obeys, bounds each hyperedge's entropy by its
/// weight, forces functional dependencies to have zero conditional entropy,
/// and maximizes the largest width achievable across every bag of the
/// selector simultaneously.
///
/// Operates purely on already-encoded data (`n`, [`Subset`]s, `f64`s) so it
/// never needs the caller's vertex type `V` inside the solve itself — the
/// parallel fan-out over selectors in [`crate::submodular_width`] stays free
/// of any `V: Send + Sync` bound this way.
pub(crate) fn solve(
    n: usize,
    bags: &[Subset],
    edges: &[Subset],
    weights: &[f64],
    fds: &[(Subset, Subset)],
) -> Result<f64, WidthError> {
    if bags.is_empty() {
        return Ok(0.0);
    }

    let lattice_size = 1usize << n;
    let mut vars = ProblemVariables::new();
    let h: Vec<Variable> = (0..lattice_size).map(|_| vars.add(variable().min(0.0))).collect();
    let w = vars.add(variable().min(0.0));

    let mut model = vars.maximise(w).using(good_lp::microlp);

    model = model.with(constraint!(h[Subset::empty().raw() as usize] == 0.0));

    let full = Subset::full(n);
    for mask in 0..lattice_size {
        let u = Subset::from_raw(mask as u32);
        if u == full {
            continue;
        }
        for i in 0..n {
            if u.contains(i) {
                continue;
            }
            let u_plus_i = u.union(Subset::singleton(i));
            model = model.with(constraint!(h[u.raw() as usize] <= h[u_plus_i.raw() as usize]));

            for j in (i + 1)..n {
                if u.contains(j) {
                    continue;
                }
                let u_plus_j = u.union(Subset::singleton(j));
                let u_plus_ij = u_plus_i.union(Subset::singleton(j));
                model = model.with(constraint!(
                    h[u_plus_i.raw() as usize] + h[u_plus_j.raw() as usize]
                        >= h[u_plus_ij.raw() as usize] + h[u.raw() as usize]
                ));
            }
        }
    }

    for (edge, &weight) in edges.iter().zip(weights) {
        model = model.with(constraint!(h[edge.raw() as usize] <= weight));
    }

    for &(lhs, rhs) in fds {
        // `rhs` is already normalized to `lhs ∪ rhs` by `FunctionalDependency::new`.
        model = model.with(constraint!(h[rhs.raw() as usize] == h[lhs.raw() as usize]));
    }

    for &bag in bags {
        model = model.with(constraint!(w <= h[bag.raw() as usize]));
    }

    let solution = model.solve().map_err(map_resolution_error)?;
    Ok(solution.value(w))
}
