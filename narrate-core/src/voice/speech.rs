//! Text-to-speech file generation

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use super::error::TtsError;
use super::provider::TextToSpeech;
use super::resolve::find_voice_id;

/// System-wide fallback voice name, used when no catalog entry is
/// resolvable or selectable.
pub const DEFAULT_VOICE_NAME: &str = "Rachel";

/// Result of a successful [`save_speech`] call.
#[derive(Debug, Clone)]
pub struct SpeechOutcome {
    /// The voice the audio was actually synthesized with.
    pub voice_id: String,
    pub voice_label: String,
    /// True when the requested name had no match and the first catalog
    /// entry was used instead.
    pub fallback: bool,
    pub bytes_written: usize,
}

/// Synthesize `text` with the named voice and write the audio to `path`.
///
/// The catalog is fetched once; the name is matched case-insensitively
/// against it. An unknown name falls back to the first voice in catalog
/// order, which is a recovery rather than an error. An empty catalog is
/// fatal for the call. The destination is created or truncated, and the
/// file handle is scoped so it is released even when the write fails.
pub async fn save_speech(
    tts: &dyn TextToSpeech,
    text: &str,
    path: &Path,
    voice_name: &str,
) -> Result<SpeechOutcome, TtsError> {
    let voices = tts.list_voices().await?;

    let (voice_id, voice_label, fallback) = match find_voice_id(&voices, voice_name) {
        Some(id) => (id.to_string(), voice_name.to_string(), false),
        None => {
            let first = voices.first().ok_or(TtsError::NoVoicesAvailable)?;
            info!(
                requested = voice_name,
                using = first.display_label(),
                "voice not found, falling back to first catalog entry"
            );
            (first.voice_id.clone(), first.display_label().to_string(), true)
        }
    };

    let audio = tts.synthesize(&voice_id, text).await?;

    {
        let mut file = File::create(path)?;
        file.write_all(&audio)?;
    }

    info!(
        path = %path.display(),
        voice_id = %voice_id,
        bytes = audio.len(),
        "audio file written"
    );

    Ok(SpeechOutcome {
        voice_id,
        voice_label,
        fallback,
        bytes_written: audio.len(),
    })
}
