//! Skene console binary.
//!
//! - Config: `skene.yaml` (or first CLI arg, or `SKENE_CONFIG`), defaults if absent
//! - Locales: embedded, optionally extended from `localization.locales_dir`
//! - Front end: stdin commands, window snapshot on stdout, logs on stderr

use std::process::ExitCode;

use tokio::io::BufReader;
use tracing_subscriber::{fmt, EnvFilter};

use skene_app::{config, console, ui::App};

const DEFAULT_CONFIG: &str = "skene.yaml";

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SKENE_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    let cfg = match config::load_or_default(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(%path, kind = e.kind().as_str(), error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    let mut app = match App::new(cfg) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(kind = e.kind().as_str(), error = %e, "startup failed");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(title = app.title(), "skene starting");
    let stdin = BufReader::new(tokio::io::stdin());
    if let Err(e) = console::run(&mut app, stdin, tokio::io::stdout()).await {
        tracing::error!(kind = e.kind().as_str(), error = %e, "console failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
