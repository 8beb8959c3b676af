//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum MaddpgError {
    /// The replay buffer holds fewer transitions than one batch.
    #[error("Not enough samples in the replay buffer: {len} < {batch_size}")]
    NotEnoughSamples {
        /// Current number of stored transitions.
        len: usize,
        /// Requested batch size.
        batch_size: usize,
    },

    /// A state or action vector has the wrong length.
    #[error("Shape mismatch for {what}: expected length {expected}, got {got}")]
    ShapeMismatch {
        /// Name of the offending vector.
        what: &'static str,
        /// Declared length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// A per-agent sequence does not have one entry per agent.
    #[error("Length mismatch for {what}: expected {expected} per-agent entries, got {got}")]
    AgentCountMismatch {
        /// Name of the offending sequence.
        what: &'static str,
        /// Number of agents.
        expected: usize,
        /// Actual number of entries.
        got: usize,
    },
}
