//! Voice name to voice id resolution

use tracing::warn;

use super::provider::TextToSpeech;
use super::types::Voice;

/// Find the first catalog entry whose name matches `voice_name`, ignoring
/// case. Entries without a name never match. Returns the entry's id.
pub fn find_voice_id<'a>(voices: &'a [Voice], voice_name: &str) -> Option<&'a str> {
    let wanted = voice_name.to_lowercase();
    voices
        .iter()
        .find(|voice| {
            voice
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase() == wanted)
        })
        .map(|voice| voice.voice_id.as_str())
}

/// Resolve a voice name against a freshly fetched catalog.
///
/// Fetches the catalog on every call; a failed fetch resolves to `None`
/// rather than an error. Callers that already hold a catalog should use
/// [`find_voice_id`] to avoid the duplicate network round trip.
pub async fn resolve_voice_id(tts: &dyn TextToSpeech, voice_name: &str) -> Option<String> {
    match tts.list_voices().await {
        Ok(voices) => find_voice_id(&voices, voice_name).map(str::to_string),
        Err(err) => {
            warn!(error = %err, voice_name, "voice resolution failed, catalog unavailable");
            None
        }
    }
}
