use thiserror::Error;

/// The error taxonomy an SSSP solve can fail with.
///
/// Every variant maps to a fixed, nonzero `error_code` across the C ABI
/// (`0` is reserved for success and is never produced by [`SsspError`]).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SsspError {
    #[error("invalid CSR shape: {0}")]
    InvalidShape(&'static str),

    #[error("vertex id out of range: {0}")]
    OutOfRangeVertex(u32),

    #[error("invalid edge weight: {0}")]
    InvalidWeight(f32),

    #[error("resource exhaustion while sizing solver state")]
    ResourceExhaustion,

    #[error("internal invariant violated: {0}")]
    InternalInvariant(&'static str),
}

impl SsspError {
    /// The stable, nonzero code reported through the C ABI's `error_code`
    /// field. Never retried, never partially recoverable.
    pub const fn error_code(&self) -> i32 {
        match self {
            SsspError::InvalidShape(_) => 1,
            SsspError::OutOfRangeVertex(_) => 2,
            SsspError::InvalidWeight(_) => 3,
            SsspError::ResourceExhaustion => 4,
            SsspError::InternalInvariant(_) => 5,
        }
    }
}
