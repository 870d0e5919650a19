//! Fractional hypertree width (FHTW) and submodular width (SUBW) of a query
//! hypergraph, with optional awareness of functional dependencies (FDs).
//!
//! These two width measures bound the worst-case complexity of evaluating a
//! conjunctive query whose join structure is described by a hypergraph. The
//! crate is organized around three subsystems: tree-decomposition
//! enumeration with subsumption pruning ([`td`]), bag-selector enumeration
//! ([`selector`]), and the linear programs built over the Boolean lattice of
//! vertex subsets ([`lp`]). See `SPEC_FULL.md` in the repository root for
//! the full component design and `DESIGN.md` for where each part is
//! grounded.

mod bag;
mod error;
mod fd;
mod fhtw;
mod hypergraph;
mod lp;
mod selector;
mod subset;
mod subsumption;
mod subw;
mod td;

pub use bag::Bag;
pub use error::WidthError;
pub use fd::FunctionalDependency;
pub use fhtw::fractional_hypertree_width;
pub use hypergraph::Hypergraph;
pub use selector::Selector;
pub use subset::Subset;
pub use subw::submodular_width;
pub use td::{enumerate_tds, TreeDecomposition};
