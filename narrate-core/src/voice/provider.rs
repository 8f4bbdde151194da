use async_trait::async_trait;

use super::error::TtsError;
use super::types::Voice;

/// Trait for text-to-speech providers
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// List the voices available to this account, in catalog order.
    async fn list_voices(&self) -> Result<Vec<Voice>, TtsError>;

    /// Synthesize text with the given voice, returning the full audio
    /// payload (an MP3 container) assembled in memory.
    async fn synthesize(&self, voice_id: &str, text: &str) -> Result<Vec<u8>, TtsError>;
}
