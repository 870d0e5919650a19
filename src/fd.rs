use std::fmt::Debug;
use std::hash::Hash;

use crate::error::WidthError;
use crate::hypergraph::Hypergraph;
use crate::subset::Subset;

/// A functional dependency `lhs -> rhs` over a hypergraph's vertex set
/// (§3, §4.7): knowing the values of every vertex in `lhs` determines the
/// values of every vertex in `rhs`.
///
/// `rhs` is normalized at construction to `lhs ∪ rhs`, matching the LP's
/// `h[Y] − h[X] = 0` constraint where `Y` is already `X ∪ Y` (§4.6). Stored
/// against caller-supplied vertex identifiers so it can be validated and
/// encoded against whichever [`Hypergraph`] it is meant for; the entropy LP
/// only ever sees the encoded `(Subset, Subset)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionalDependency<V> {
    lhs: Vec<V>,
    rhs: Vec<V>,
}

impl<V: Clone + Eq + Hash + Ord + Debug> FunctionalDependency<V> {
    /// Builds an FD. `lhs` and the user-supplied `rhs` may not be empty,
    /// each must have unique members, and they must be disjoint on input —
    /// an FD whose right side already overlaps its left side is rejected as
    /// malformed rather than silently accepted (§4.7, §6 `make_fd`). The
    /// stored `rhs` is then normalized to `lhs ∪ rhs`.
    pub fn new(lhs: Vec<V>, rhs: Vec<V>) -> Result<Self, WidthError> {
        if lhs.is_empty() {
            return Err(WidthError::config("functional dependency left-hand side must be nonempty"));
        }
        if rhs.is_empty() {
            return Err(WidthError::config("functional dependency right-hand side must be nonempty"));
        }
        if has_duplicates(&lhs) {
            return Err(WidthError::config("functional dependency left-hand side has duplicate members"));
        }
        if has_duplicates(&rhs) {
            return Err(WidthError::config("functional dependency right-hand side has duplicate members"));
        }
        if rhs.iter().any(|v| lhs.contains(v)) {
            return Err(WidthError::config(
                "functional dependency right-hand side must be disjoint from its left-hand side",
            ));
        }

        let mut normalized_rhs = lhs.clone();
        normalized_rhs.extend(rhs);
        Ok(FunctionalDependency {
            lhs,
            rhs: normalized_rhs,
        })
    }

    pub fn lhs(&self) -> &[V] {
        &self.lhs
    }

    /// The normalized right-hand side, `lhs ∪ rhs` as originally supplied.
    pub fn rhs(&self) -> &[V] {
        &self.rhs
    }

    /// Encodes this FD against `hypergraph`'s vertex index assignment and
    /// validates that its normalized right-hand side is contained in some
    /// hyperedge, as required before it may be added to the SUBW LP (§4.7,
    /// §6 `validate_fd`).
    pub(crate) fn encode(&self, hypergraph: &Hypergraph<V>) -> Result<(Subset, Subset), WidthError> {
        let lhs = hypergraph.encode_subset(&self.lhs)?;
        let rhs = hypergraph.encode_subset(&self.rhs)?;
        if !hypergraph.edges_raw().iter().any(|&e| rhs.is_subset(e)) {
            return Err(WidthError::config(
                "functional dependency right-hand side is not contained in any hyperedge",
            ));
        }
        Ok((lhs, rhs))
    }
}

fn has_duplicates<V: Eq>(items: &[V]) -> bool {
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            if items[i] == items[j] {
                return true;
            }
        }
    }
    false
}
