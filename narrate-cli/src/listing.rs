//! Voice catalog listing

use narrate_core::TextToSpeech;

/// Print one descriptive block per catalog voice. A fetch failure is
/// reported and treated as an empty catalog; listing never aborts the
/// process.
pub async fn print_voice_catalog(tts: &dyn TextToSpeech) {
    let voices = match tts.list_voices().await {
        Ok(voices) => voices,
        Err(err) => {
            eprintln!("Error fetching Eleven Labs voices: {err}");
            Vec::new()
        }
    };

    if voices.is_empty() {
        println!("No voices available.");
        return;
    }

    println!("Available Eleven Labs voices:");
    for voice in &voices {
        println!("- {} (ID: {})", voice.display_label(), voice.voice_id);
        println!(
            "  Category: {}",
            voice.category.as_deref().unwrap_or("unknown")
        );
        println!(
            "  Description: {}",
            voice.description.as_deref().unwrap_or("No description")
        );
        println!();
    }
}
