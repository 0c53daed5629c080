/// Convenience result type used across the crate.
pub type FlipbookResult<T> = Result<T, FlipbookError>;

/// Crate error type.
///
/// Errors only surface at construction and configuration boundaries. Navigation, timer
/// dispatch, and load completion never fail; they degrade to an idle controller instead.
#[derive(thiserror::Error, Debug)]
pub enum FlipbookError {
    /// Input data violated a structural rule (for example an unknown spread index).
    #[error("validation error: {0}")]
    Validation(String),

    /// Timing or preload constants are inconsistent.
    #[error("config error: {0}")]
    Config(String),

    /// Host-side asset handling failed.
    #[error("asset error: {0}")]
    Asset(String),

    /// Any other error, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlipbookError {
    /// Construct a [`FlipbookError::Validation`] error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Construct a [`FlipbookError::Config`] error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Construct a [`FlipbookError::Asset`] error.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
