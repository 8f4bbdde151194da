use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use narrate_core::{save_speech, ElevenLabs, ElevenLabsConfig, Settings};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod listing;
mod select;

use crate::select::Selection;

#[derive(Parser, Debug)]
#[command(name = "narrate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert text to audio using the Eleven Labs API")]
struct Args {
    /// The name of the voice to use. Without it (and without --interactive)
    /// the available voices are listed instead.
    #[arg(long)]
    voice: Option<String>,

    /// Pick the voice from a numbered list
    #[arg(long, short, conflicts_with = "voice")]
    interactive: bool,

    /// Text to convert; a short sample line naming the voice is used when
    /// omitted
    #[arg(long)]
    text: Option<String>,

    /// Destination for the generated MP3
    #[arg(long, default_value = "audio/test_audio.mp3")]
    output: PathBuf,
}

fn main() -> Result<()> {
    setup_tracing()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    info!(
        interactive = args.interactive,
        voice = args.voice.as_deref().unwrap_or("none"),
        output = %args.output.display(),
        "CLI startup"
    );

    let settings = Settings::load();
    let tts = ElevenLabs::new(ElevenLabsConfig::new(settings.api_key()));

    let voice_name = if args.interactive {
        match select::select_voice(&tts).await? {
            Selection::Voice(name) => name,
            Selection::Cancelled => {
                println!("No voice selected.");
                return Ok(());
            }
        }
    } else {
        match args.voice {
            Some(voice) => voice,
            None => {
                listing::print_voice_catalog(&tts).await;
                return Ok(());
            }
        }
    };

    let text = args.text.unwrap_or_else(|| {
        format!("Hello, my name is {voice_name}, and this is a test of the text to speech feature.")
    });

    // Parent directories are the wrapper's concern, not the synthesizer's.
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    println!("\n=== Saving to File with {voice_name} ===");
    match save_speech(&tts, &text, &args.output, &voice_name).await {
        Ok(outcome) => {
            if outcome.fallback {
                println!(
                    "Voice '{voice_name}' not found. Using '{}' instead.",
                    outcome.voice_label
                );
            }
            println!(
                "✅ Audio successfully saved to: {} ({} bytes)",
                args.output.display(),
                outcome.bytes_written
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("❌ Error saving audio file: {err}");
            std::process::exit(1);
        }
    }
}

fn setup_tracing() -> Result<()> {
    use tracing_subscriber::fmt;

    // Diagnostics go to a log file so they never interleave with the
    // interactive prompt.
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/tmp"));
    let trace_dir = home.join(".narrate").join("trace");
    fs::create_dir_all(&trace_dir)?;

    let log_file = trace_dir.join("narrate.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    Ok(())
}
