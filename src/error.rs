use thiserror::Error;

/// Failures that can occur before or after a search. An unreachable goal is not one of them: it
/// is reported as [None] by the solvers and as [Outcome::NoPath](crate::Outcome::NoPath) by the
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("grid contains no non-empty lines")]
    EmptyGrid,
    #[error("marker {marker:?} does not occur in the grid")]
    MarkerNotFound { marker: char },
    /// The predecessor map does not lead back from the goal to the start. Only a corrupted map can
    /// cause this, so it signals a bug rather than bad input.
    #[error("predecessor chain is broken after {steps} steps from the goal")]
    BrokenPredecessorChain { steps: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
