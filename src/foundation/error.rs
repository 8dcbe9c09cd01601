/// Convenience result type used across panogen APIs.
pub type PanoResult<T> = Result<T, PanoError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type returned by panogen operations.
pub enum PanoError {
    /// Input config or canvas dimensions are invalid.
    #[error("validation error: {0}")]
    Validation(String),

    /// A font file could not be read or contains no usable face.
    #[error("font error: {0}")]
    Font(String),

    /// Rasterization failed (surface limits, readback mismatch).
    #[error("render error: {0}")]
    Render(String),

    /// Image encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PanoError {
    /// Build a [`PanoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PanoError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`PanoError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PanoError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
