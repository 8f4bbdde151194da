//! Mock text-to-speech provider for tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::error::TtsError;
use super::provider::TextToSpeech;
use super::types::Voice;

/// Mock behavior for the mock provider
#[derive(Debug, Clone, Default)]
pub enum MockBehavior {
    /// Serve the configured catalog and audio
    #[default]
    Success,
    /// Behave as if no API key was configured
    MissingApiKey,
    /// Fail every request with a service error
    ServiceError,
}

/// In-memory [`TextToSpeech`] implementation. Serves a fixed catalog and a
/// fixed list of audio chunks, and records the voice id of every synthesis
/// call so tests can assert which voice was used.
pub struct MockTts {
    voices: Vec<Voice>,
    chunks: Vec<Vec<u8>>,
    behavior: MockBehavior,
    synthesized: Mutex<Vec<String>>,
    list_calls: Mutex<usize>,
}

impl MockTts {
    pub fn new(voices: Vec<Voice>) -> Self {
        Self {
            voices,
            chunks: vec![b"mock audio".to_vec()],
            behavior: MockBehavior::Success,
            synthesized: Mutex::new(Vec::new()),
            list_calls: Mutex::new(0),
        }
    }

    /// Convenience constructor for named premade voices.
    pub fn with_named_voices(entries: &[(&str, &str)]) -> Self {
        let voices = entries
            .iter()
            .map(|(id, name)| Voice {
                voice_id: id.to_string(),
                name: Some(name.to_string()),
                category: Some("premade".to_string()),
                description: None,
            })
            .collect();
        Self::new(voices)
    }

    pub fn with_audio_chunks(mut self, chunks: Vec<Vec<u8>>) -> Self {
        self.chunks = chunks;
        self
    }

    pub fn with_behavior(mut self, behavior: MockBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Voice ids passed to `synthesize`, in call order.
    pub fn synthesized_voice_ids(&self) -> Vec<String> {
        self.synthesized.lock().unwrap().clone()
    }

    /// Number of times the catalog was fetched.
    pub fn list_voices_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    fn check_behavior(&self) -> Result<(), TtsError> {
        match self.behavior {
            MockBehavior::Success => Ok(()),
            MockBehavior::MissingApiKey => Err(TtsError::MissingApiKey),
            MockBehavior::ServiceError => Err(TtsError::Api {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: "mock service error".to_string(),
            }),
        }
    }
}

#[async_trait]
impl TextToSpeech for MockTts {
    async fn list_voices(&self) -> Result<Vec<Voice>, TtsError> {
        *self.list_calls.lock().unwrap() += 1;
        self.check_behavior()?;
        Ok(self.voices.clone())
    }

    async fn synthesize(&self, voice_id: &str, _text: &str) -> Result<Vec<u8>, TtsError> {
        self.check_behavior()?;
        self.synthesized.lock().unwrap().push(voice_id.to_string());
        // Chunks are concatenated in order, exactly as the real provider
        // assembles the streamed response.
        Ok(self.chunks.concat())
    }
}
