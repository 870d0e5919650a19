use thiserror::Error;

/// The three fatal error kinds the core can raise (§7).
///
/// No variant is ever caught internally and retried: a `Config` error means
/// the caller handed the core invalid data, a `Solver` error means the LP
/// solver itself failed to certify optimality (and the LP is deterministic
/// in its inputs, so retrying is pointless), and a `Logic` error guards an
/// invariant that should be unreachable in correct code.
#[derive(Debug, Error)]
pub enum WidthError {
    #[error("invalid hypergraph or functional-dependency configuration: {0}")]
    Config(String),

    #[error("linear program did not solve to optimality: {0}")]
    Solver(String),

    #[error("internal invariant violated: {0}")]
    Logic(String),
}

impl WidthError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        WidthError::Config(message.into())
    }

    pub(crate) fn logic(message: impl Into<String>) -> Self {
        WidthError::Logic(message.into())
    }
}
