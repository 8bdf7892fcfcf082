use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// Per-step operations (random draws, occupancy checks, respawns) are total
/// over the domains enforced by the boundary recycler, so the only failures
/// are precondition violations at construction time.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
