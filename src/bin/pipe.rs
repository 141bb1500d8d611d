// Line protocol for hosts that drive the resolver over stdin/stdout.
// Each input line is a JSON request, each output line the matching response.
use anyhow::Result;
use gesture_core::core::types::GestureStep;
use gesture_core::{EngineConfig, GestureEngine, ResolutionError};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Deserialize)]
struct Request {
    #[serde(default)]
    asl_gloss: Option<String>,
    #[serde(default)]
    transcript: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response {
    Sequence {
        gesture_sequence: Vec<GestureStep>,
        original_gloss: String,
    },
    Error {
        error: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gesture_core=info,gesture_pipe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = EngineConfig::from_env()?;
    let engine = GestureEngine::from_config(&config);
    info!(path = %config.dictionary_path.display(), "gesture pipe ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        debug!(request = %line, "<-");

        let response = handle_line(&engine, &line);
        let encoded = serde_json::to_string(&response)?;
        debug!(response = %encoded, "->");
        writeln!(stdout, "{}", encoded)?;
        stdout.flush()?;
    }

    info!("gesture pipe shutting down");
    Ok(())
}

fn handle_line(engine: &GestureEngine, line: &str) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "malformed request");
            return Response::Error { error: format!("malformed request: {}", e) };
        }
    };

    let result = match (request.asl_gloss, request.transcript) {
        (Some(gloss), _) => engine.resolve(&gloss).map(|steps| (gloss, steps)),
        (None, Some(transcript)) => engine
            .translate(&transcript)
            .map(|translation| (translation.gloss, translation.steps)),
        (None, None) => Err(ResolutionError::EmptyInput),
    };

    match result {
        Ok((original_gloss, gesture_sequence)) => Response::Sequence {
            gesture_sequence,
            original_gloss,
        },
        Err(ResolutionError::EmptyInput) => Response::Error {
            error: "asl_gloss is required".to_string(),
        },
        Err(e) => Response::Error { error: e.to_string() },
    }
}
