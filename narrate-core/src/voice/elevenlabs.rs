//! ElevenLabs text-to-speech implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::TtsError;
use super::provider::TextToSpeech;
use super::types::Voice;

const API_BASE_URL: &str = "https://api.elevenlabs.io/v1";

/// Model submitted with every synthesis request. A contract constant, not
/// user-configurable.
pub const MODEL_ID: &str = "eleven_monolingual_v1";

#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    pub api_key: String,
    pub model_id: String,
}

impl ElevenLabsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model_id: MODEL_ID.to_string(),
        }
    }
}

pub struct ElevenLabs {
    config: ElevenLabsConfig,
    client: Client,
}

impl ElevenLabs {
    pub fn new(config: ElevenLabsConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fail fast when no credential is configured, before any network call.
    fn require_api_key(&self) -> Result<&str, TtsError> {
        let key = self.config.api_key.trim();
        if key.is_empty() {
            return Err(TtsError::MissingApiKey);
        }
        Ok(key)
    }
}

#[derive(Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

#[derive(Deserialize)]
struct VoicesResponse {
    voices: Vec<Voice>,
}

#[async_trait]
impl TextToSpeech for ElevenLabs {
    async fn list_voices(&self) -> Result<Vec<Voice>, TtsError> {
        let api_key = self.require_api_key()?;

        let response = self
            .client
            .get(format!("{API_BASE_URL}/voices"))
            .header("xi-api-key", api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TtsError::Api { status, body });
        }

        let VoicesResponse { voices } = response.json().await?;
        debug!(count = voices.len(), "fetched voice catalog");
        Ok(voices)
    }

    async fn synthesize(&self, voice_id: &str, text: &str) -> Result<Vec<u8>, TtsError> {
        let api_key = self.require_api_key()?;

        let url = format!("{API_BASE_URL}/text-to-speech/{voice_id}");
        let request_body = SynthesizeRequest {
            text,
            model_id: &self.config.model_id,
        };

        let mut response = self
            .client
            .post(&url)
            .header("xi-api-key", api_key)
            .header("Accept", "audio/mpeg")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TtsError::Api { status, body });
        }

        // The service streams the MP3 back in chunks; assemble the whole
        // payload in memory before returning it.
        let mut audio = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            audio.extend_from_slice(&chunk);
        }

        debug!(voice_id, bytes = audio.len(), "synthesis complete");
        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voices_response_parses_optional_fields() {
        let json = r#"{
            "voices": [
                {
                    "voice_id": "voice_123",
                    "name": "Rachel",
                    "category": "premade",
                    "description": "Calm narration voice"
                },
                {
                    "voice_id": "voice_456",
                    "name": null,
                    "category": "cloned"
                }
            ]
        }"#;

        let parsed: VoicesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.voices.len(), 2);
        assert_eq!(parsed.voices[0].voice_id, "voice_123");
        assert_eq!(parsed.voices[0].name.as_deref(), Some("Rachel"));
        assert_eq!(parsed.voices[0].category.as_deref(), Some("premade"));
        assert_eq!(parsed.voices[1].name, None);
        assert_eq!(parsed.voices[1].description, None);
    }

    #[test]
    fn test_voices_response_preserves_catalog_order() {
        let json = r#"{"voices": [
            {"voice_id": "c"}, {"voice_id": "a"}, {"voice_id": "b"}
        ]}"#;

        let parsed: VoicesResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = parsed.voices.iter().map(|v| v.voice_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_blank_api_key_fails_without_network() {
        let tts = ElevenLabs::new(ElevenLabsConfig::new("   "));

        let err = tts.list_voices().await.unwrap_err();
        assert!(matches!(err, TtsError::MissingApiKey));

        let err = tts.synthesize("voice_123", "hello").await.unwrap_err();
        assert!(matches!(err, TtsError::MissingApiKey));
    }

    #[test]
    fn test_synthesize_request_wire_format() {
        let body = SynthesizeRequest {
            text: "hello",
            model_id: MODEL_ID,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["text"], "hello");
        assert_eq!(json["model_id"], "eleven_monolingual_v1");
    }
}
