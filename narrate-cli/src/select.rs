//! Interactive voice selection

use anyhow::Result;
use narrate_core::{TextToSpeech, Voice, DEFAULT_VOICE_NAME};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Outcome of the interactive prompt. Cancellation is distinct from
/// accepting the default voice with blank input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Voice(String),
    Cancelled,
}

/// One line of user input, or a cancellation signal (Ctrl-C / EOF).
enum PromptLine {
    Line(String),
    Cancelled,
}

trait LinePrompt {
    fn read_line(&mut self, prompt: &str) -> PromptLine;
}

struct RustylinePrompt {
    editor: DefaultEditor,
}

impl RustylinePrompt {
    fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LinePrompt for RustylinePrompt {
    fn read_line(&mut self, prompt: &str) -> PromptLine {
        match self.editor.readline(prompt) {
            Ok(line) => PromptLine::Line(line),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => PromptLine::Cancelled,
            Err(err) => {
                eprintln!("Error reading input: {err}");
                PromptLine::Cancelled
            }
        }
    }
}

/// Let the user pick a voice from the catalog.
///
/// The catalog is fetched once at entry. When it is empty or unavailable
/// the hardcoded default name is returned without prompting.
pub async fn select_voice(tts: &dyn TextToSpeech) -> Result<Selection> {
    let voices = match tts.list_voices().await {
        Ok(voices) => voices,
        Err(err) => {
            eprintln!("Error fetching Eleven Labs voices: {err}");
            Vec::new()
        }
    };

    if voices.is_empty() {
        println!("❌ No voices available. Using default.");
        return Ok(Selection::Voice(DEFAULT_VOICE_NAME.to_string()));
    }

    println!("Found {} available voices:", voices.len());
    for (i, voice) in voices.iter().enumerate() {
        println!(
            "{}. {} ({})",
            i + 1,
            voice.display_label(),
            voice.category.as_deref().unwrap_or("unknown")
        );
        if let Some(description) = &voice.description {
            println!("   {description}");
        }
    }

    let mut prompt = RustylinePrompt::new()?;
    Ok(run_selection(&voices, &mut prompt))
}

/// Read-validate-reprompt loop: blank input accepts the first voice, a
/// valid 1-based index picks that voice, anything else reprompts.
fn run_selection(voices: &[Voice], prompt: &mut dyn LinePrompt) -> Selection {
    loop {
        let line = match prompt.read_line(&format!(
            "\nSelect a voice (1-{}) or press Enter for default: ",
            voices.len()
        )) {
            PromptLine::Line(line) => line,
            PromptLine::Cancelled => {
                println!("\n⚠️  Cancelled by user");
                return Selection::Cancelled;
            }
        };

        let choice = line.trim();
        if choice.is_empty() {
            return Selection::Voice(selected_name(&voices[0]));
        }

        match choice.parse::<usize>() {
            Ok(n) if (1..=voices.len()).contains(&n) => {
                let name = selected_name(&voices[n - 1]);
                println!("✅ Selected: {name}");
                return Selection::Voice(name);
            }
            Ok(_) => println!("❌ Please enter a number between 1 and {}", voices.len()),
            Err(_) => println!("❌ Please enter a valid number"),
        }
    }
}

/// A voice without a name can never be matched by name downstream, so the
/// system default stands in for it.
fn selected_name(voice: &Voice) -> String {
    voice
        .name
        .clone()
        .unwrap_or_else(|| DEFAULT_VOICE_NAME.to_string())
}
