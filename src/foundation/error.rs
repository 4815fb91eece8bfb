/// Convenience result type used across Holoreel.
pub type HoloreelResult<T> = Result<T, HoloreelError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum HoloreelError {
    /// Invalid user-provided options, paths, or stack geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// A stack carries a trailing channel axis the pipeline cannot interpret.
    #[error("channel shape error: {0}")]
    ChannelShape(String),

    /// Errors while spawning, streaming to, or finalizing the encoder.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HoloreelError {
    /// Build a [`HoloreelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HoloreelError::ChannelShape`] value.
    pub fn channel_shape(msg: impl Into<String>) -> Self {
        Self::ChannelShape(msg.into())
    }

    /// Build a [`HoloreelError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
