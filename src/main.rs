//! reddit-tts - narration for Reddit thread videos
//!
//! Synthesizes one clip from text with the configured TTS backend.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reddit_tts::config::Config;
use reddit_tts::core::TextProcessor;
use reddit_tts::tts::voices::{self, VoiceCategory};
use reddit_tts::{create_backend, Narrator};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Narrate text into an audio file
    Say {
        /// Text to narrate
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output path (defaults to <temp_dir>/<thread>/mp3/clip.mp3)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Backend override: tiktok or openai
        #[arg(short, long)]
        engine: Option<String>,

        /// Pick a random English voice
        #[arg(long)]
        random_voice: bool,

        /// Reddit thread id used for the default output directory
        #[arg(long, default_value = "clip")]
        thread_id: String,

        /// Translate to this language before narrating
        #[arg(long)]
        lang: Option<String>,
    },

    /// List the TikTok voice catalog
    Voices {
        /// Only this category: themed, english, non-english, vocal
        #[arg(long)]
        category: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Voices { category } => list_voices(category.as_deref()),
        Command::Say {
            text,
            file,
            out,
            engine,
            random_voice,
            thread_id,
            lang,
        } => {
            let mut config = match &args.config {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };
            if let Some(engine) = engine {
                config.tts_engine = engine;
            }
            if let Some(lang) = lang {
                config.post_lang = lang;
            }
            config.random_voice |= random_voice;

            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                (None, None) => anyhow::bail!("Provide --text or --file"),
            };
            let out = out
                .unwrap_or_else(|| config.thread_dir(&thread_id).join("clip.mp3"));

            say(&config, &text, out).await
        }
    }
}

async fn say(config: &Config, text: &str, out: PathBuf) -> Result<()> {
    info!("🎬 reddit-tts v{} starting...", env!("CARGO_PKG_VERSION"));

    let backend = create_backend(config).map_err(|e| {
        error!("❌ {}", e);
        e
    })?;
    let narrator = Narrator::new(backend, TextProcessor::from_config(config))
        .with_random_voice(config.random_voice);

    match narrator.narrate(text, &out).await {
        Ok(clip) => {
            println!("{} ({:.2}s)", clip.path.display(), clip.duration_secs);
            Ok(())
        }
        Err(e) => {
            error!("❌ Narration failed ({:?}): {}", e.kind(), e);
            Err(e.into())
        }
    }
}

fn list_voices(category: Option<&str>) -> Result<()> {
    let categories = match category {
        Some(name) => vec![VoiceCategory::from_name(name)
            .with_context(|| format!("Unknown voice category '{}'", name))?],
        None => VoiceCategory::ALL.to_vec(),
    };

    for category in categories {
        println!("[{}]", category.name());
        for voice in voices::voices_in(category) {
            println!("  {:<36} {}", voice.id, voice.label);
        }
    }
    Ok(())
}
