//! Demo shell that drives the capture, interpret, dispatch pipeline from a
//! keyboard standing in for the microphone.

mod shell;
mod typed;

use clap::Parser;
use voicenav::{telemetry, AppConfig};

#[derive(Debug, Parser)]
#[command(
    name = "voicenav",
    about = "Voice-command navigation demo shell",
    version
)]
struct Cli {
    #[command(flatten)]
    app: AppConfig,

    /// Emit one JSON line per transcript instead of human-readable output
    #[arg(long = "json", default_value_t = false)]
    json: bool,

    /// Interpret a single transcript and exit
    #[arg(long = "once", value_name = "TRANSCRIPT")]
    once: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(&cli.app);
    shell::run(&cli.app, cli.json, cli.once.as_deref())
}
