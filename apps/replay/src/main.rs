use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use selection_core::{CollectionKind, OutboundIntent, Session};
use serde_json::json;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::EnvFilter;

mod config;
mod script;

use script::ScriptStep;

/// Replays gestures and backend pushes through a selection session and
/// prints every outbound intent as a JSON line.
#[derive(Parser, Debug)]
#[command(name = "selection-replay")]
struct Args {
    /// JSON-lines script; read from stdin when omitted.
    #[arg(long)]
    script: Option<PathBuf>,
    #[arg(long, default_value = "replay.toml")]
    config: PathBuf,
    /// Print the final selection and check state after the script.
    #[arg(long)]
    summary: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = config::load_settings(&args.config);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let raw = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read script '{}'", path.display()))?,
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read script from stdin")?;
            raw
        }
    };
    let steps = script::parse_script(&raw)?;
    tracing::info!(steps = steps.len(), "replaying script");

    let (mut session, mut intents) = Session::new(&settings.controller);
    for step in steps {
        match step {
            ScriptStep::User(gesture) => session.handle(gesture),
            ScriptStep::Push(payload) => {
                if let Err(err) = session.apply_raw(&payload.to_string()) {
                    tracing::info!("push rejected, state kept: {err}");
                }
            }
            ScriptStep::WaitMs(ms) => tokio::time::sleep(Duration::from_millis(ms)).await,
        }
        print_intents(&mut intents)?;
    }

    // Let a still-armed activation fire before exiting.
    let settle = settings.controller.activation_delay() + Duration::from_millis(1);
    tokio::time::sleep(settle).await;
    print_intents(&mut intents)?;

    if args.summary {
        println!("{}", summary(&session));
    }

    Ok(())
}

fn print_intents(intents: &mut UnboundedReceiver<OutboundIntent>) -> Result<()> {
    while let Ok(intent) = intents.try_recv() {
        println!("{}", serde_json::to_string(&intent)?);
    }
    Ok(())
}

fn summary(session: &Session) -> serde_json::Value {
    let collection = |kind: CollectionKind| {
        let controller = session.controller(kind);
        json!({
            "len": controller.registry().len(),
            "selection": controller.current_selection(),
            "checked": controller.current_checked(),
            "anchor": controller.anchor(),
            "preview_busy": controller.preview_busy(),
        })
    };
    json!({
        "summary": {
            "dependencies": collection(CollectionKind::Dependencies),
            "frames": collection(CollectionKind::Frames),
            "preview": session.preview().map(|preview| json!({
                "index": preview.index,
                "filename": preview.filename,
                "frame_count": preview.frame_count,
            })),
        }
    })
}
