use thiserror::Error;

/// Errors produced by the voice catalog and synthesis pipeline.
#[derive(Error, Debug)]
pub enum TtsError {
    /// No API key was configured. Returned before any network call.
    #[error("ElevenLabs API key not found in environment")]
    MissingApiKey,

    /// The service answered with a non-success status.
    #[error("ElevenLabs API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("request to ElevenLabs failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The account exposes no voices at all; synthesis cannot proceed.
    #[error("no voices available")]
    NoVoicesAvailable,

    #[error("failed to write audio file: {0}")]
    Io(#[from] std::io::Error),
}
