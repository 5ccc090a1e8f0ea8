/// Convenience result type used across Velograph.
pub type VeloResult<T> = Result<T, VeloError>;

/// Top-level error taxonomy used by the compositor APIs.
#[derive(thiserror::Error, Debug)]
pub enum VeloError {
    /// Invalid user-provided configuration (palette, dimensions, threading).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while parsing a font resource.
    ///
    /// Note that the default font path never surfaces this: a missing or
    /// unreadable system font falls back to the built-in bitmap font.
    #[error("font error: {0}")]
    Font(String),

    /// Errors while encoding or writing an output image.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VeloError {
    /// Build a [`VeloError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VeloError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`VeloError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
