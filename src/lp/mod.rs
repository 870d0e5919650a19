//! Linear programs built over a hypergraph's vertex subsets (§5).
//!
//! Both families bottom out in [`good_lp`] with the pure-Rust `microlp`
//! backend (§10.4): no system solver is ever shelled out to, so the crate
//! has no native build dependency beyond the Rust toolchain itself.

pub(crate) mod edge_cover;
pub(crate) mod entropy;

use good_lp::ResolutionError;

use crate::error::WidthError;

pub(crate) fn map_resolution_error(err: ResolutionError) -> WidthError {
    WidthError::Solver(err.to_string())
}
