use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use gesture_core::core::playback::Playback;
use gesture_core::core::types::Resolution;
use gesture_core::{EngineConfig, GestureEngine};
use std::io::{stdin, stdout, Write};
use std::thread;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    init_tracing();

    let config = EngineConfig::from_env()?;
    let engine = GestureEngine::from_config(&config);

    println!("{}", "ASL Gesture Player. Type a sentence to sign it.".bold());
    println!("':gloss <GLOSS>' resolves a gloss directly, ':reload' re-reads the dictionary, 'exit' quits.");
    println!("---------------------------------------------------------------");

    loop {
        print!("\n> ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        match Command::parse(&input) {
            Command::Exit => break,
            Command::Reload => match engine.reload() {
                Ok(()) => println!("Dictionary reloaded from '{}'", config.dictionary_path.display()),
                Err(e) => println!("{} {}", "Reload failed:".red(), e),
            },
            Command::Gloss(gloss) => match engine.resolve_with_report(gloss) {
                Ok(resolution) => play(gloss, &resolution, config.playback_interval())?,
                Err(e) => println!("{} {}", "Error:".red(), e),
            },
            Command::Transcript(transcript) => {
                let gloss = engine.converter().to_gloss(transcript);
                match engine.resolve_with_report(&gloss) {
                    Ok(resolution) => play(&gloss, &resolution, config.playback_interval())?,
                    Err(e) => {
                        error!(error = %e, "could not resolve transcript");
                        println!("{} {}", "Error:".red(), e);
                    }
                }
            }
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Exit,
    Reload,
    /// Everything after `:gloss`, possibly empty.
    Gloss(&'a str),
    Transcript(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line {
            "exit" => Command::Exit,
            ":reload" => Command::Reload,
            _ => match line.strip_prefix(":gloss") {
                Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                    Command::Gloss(rest.trim())
                }
                _ => Command::Transcript(line),
            },
        }
    }
}

fn play(gloss: &str, resolution: &Resolution, interval: Duration) -> Result<()> {
    if resolution.steps.is_empty() {
        println!("Nothing to display for '{}'.", gloss);
        return Ok(());
    }

    let mut out = stdout();
    for frame in Playback::with_interval(&resolution.steps, interval) {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        println!("Gloss: {}", gloss.cyan());
        println!("\n  [{}]", frame.image_ref);
        println!("  {}", frame.caption.bold().magenta());
        println!("\n  {} / {}", frame.position, frame.total);
        println!("  {}", frame.completed);
        out.flush()?;
        thread::sleep(interval);
    }

    if !resolution.skipped.is_empty() {
        let symbols: String = resolution.skipped.iter().map(|s| s.symbol).collect();
        println!("\nNo gesture for: {}", symbols.yellow());
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gesture_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
