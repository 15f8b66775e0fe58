//! Error type shared by every stage of the mixer pipeline.

/// Errors raised while validating parameters or summarizing a sample.
///
/// Every error is local to a single pipeline invocation. Nothing is
/// retried: the pipeline is a pure function of its inputs and RNG.
#[derive(Debug, thiserror::Error)]
pub enum MixerError {
    /// A population or pipeline parameter is malformed or out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Summary statistics were requested for a zero-length sample.
    #[error("cannot summarize an empty sample")]
    EmptySample,

    /// The sample holds a NaN or infinite value.
    #[error("sample value at index {index} is not finite")]
    NonFiniteSample { index: usize },

    /// A JSON configuration document could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

impl MixerError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        MixerError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
