pub mod settings;
pub mod voice;

// Public library API - the CLI consumes these directly, but they are kept
// stable enough to use narrate as a library.
pub use settings::Settings;
pub use voice::elevenlabs::{ElevenLabs, ElevenLabsConfig};
pub use voice::error::TtsError;
pub use voice::provider::TextToSpeech;
pub use voice::speech::{save_speech, SpeechOutcome, DEFAULT_VOICE_NAME};
pub use voice::types::Voice;
