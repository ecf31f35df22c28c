use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod client;
mod config;
mod error;
mod models;
mod mood;
mod playlist;
mod prompts;
mod recommender;
mod render;
mod session;


use crate::client::{InferenceClient, TextGenerator};
use crate::config::{load_config, validate_target_length};
use crate::mood::Preset;
use crate::recommender::{MoodInput, Recommender, RecommenderSettings};
use crate::session::SessionContext;

#[derive(Parser)]
#[command(name = "vibe-checker")]
#[command(about = "Your personal mood-based music curator")]
#[command(version)]
struct Args {
    /// How you feel, in your own words (e.g. "tired but hopeful")
    mood: Vec<String>,

    /// Use a preset mood instead of free text (energetic, melancholy, chill, heartbroken)
    #[arg(short = 'p', long = "preset", conflicts_with_all = ["mood", "surprise"])]
    preset: Option<Preset>,

    /// Surprise me: pick a random preset mood
    #[arg(short = 's', long = "surprise", conflicts_with = "mood")]
    surprise: bool,

    /// Skip the mood check and accept any non-empty text
    #[arg(long = "no-classify")]
    no_classify: bool,

    /// Number of songs to recommend (overrides VIBE_TARGET_LENGTH)
    #[arg(short = 'n', long = "songs")]
    target_length: Option<usize>,

    /// Print the playlist as JSON instead of cards
    #[arg(long = "json")]
    json: bool,

    /// Keep a session open and read moods from stdin
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,

    /// List the preset moods and exit
    #[arg(long = "list-presets")]
    list_presets: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .with_env_var("VIBE_LOG")
                .from_env_lossy(),
        )
        .try_init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list_presets {
        println!("{}", render::render_presets());
        return Ok(());
    }

    // Load configuration from .env
    let mut config = load_config()?;
    if let Some(target_length) = args.target_length {
        validate_target_length(target_length)?;
        config.target_length = target_length;
    }
    if args.no_classify {
        config.classifier_enabled = false;
    }

    let client = InferenceClient::new(&config);
    let recommender = Recommender::new(client, RecommenderSettings::from(&config));
    let mut session = SessionContext::new();

    if args.interactive {
        return run_interactive(&recommender, &mut session, args.json);
    }

    let input = if let Some(preset) = args.preset {
        MoodInput::Preset(preset)
    } else if args.surprise {
        MoodInput::Surprise
    } else if !args.mood.is_empty() {
        MoodInput::FreeText(args.mood.join(" "))
    } else {
        eprintln!("Tell me how you feel, pick a --preset, or try --surprise.");
        eprintln!("Presets:\n{}", render::render_presets());
        return Err(anyhow::anyhow!("No mood given"));
    };

    run_once(&recommender, &mut session, input, args.json)
}

fn run_once<G: TextGenerator>(
    recommender: &Recommender<G>,
    session: &mut SessionContext,
    input: MoodInput,
    json: bool,
) -> Result<()> {
    match recommender.recommend(session, input) {
        Ok(recommendation) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&recommendation)?);
            } else {
                println!("{}", render::render_cards(&recommendation));
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ {e}");
            Err(e.into())
        }
    }
}

fn run_interactive<G: TextGenerator>(
    recommender: &Recommender<G>,
    session: &mut SessionContext,
    json: bool,
) -> Result<()> {
    println!("🎧 VibeChecker");
    println!("Type how you feel, or one of: /energetic /melancholy /chill /heartbroken /surprise /last /history /quit");

    let stdin = io::stdin();
    loop {
        print!("\nmood> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let input = match line {
            "/quit" | "/exit" => break,
            "/history" => {
                println!("{}", render::render_history(session));
                continue;
            }
            "/last" => {
                match render::render_last(session) {
                    Some(cards) => println!("{cards}"),
                    None => println!("Nothing playing yet."),
                }
                continue;
            }
            "/surprise" => MoodInput::Surprise,
            command if command.starts_with('/') => match command[1..].parse::<Preset>() {
                Ok(preset) => MoodInput::Preset(preset),
                Err(e) => {
                    eprintln!("✗ {e}");
                    continue;
                }
            },
            text => MoodInput::FreeText(text.to_string()),
        };

        // Errors are shown and the session goes on
        let _ = run_once(recommender, session, input, json);
    }

    Ok(())
}
