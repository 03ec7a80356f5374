use anyhow::Result;
use clap::Parser;
use mulgyeol::config::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "mulgyeol",
    version,
    about = "Naver keyword trend dashboard with per-keyword news snippets",
    long_about = None
)]
struct Cli {
    /// Configuration file (TOML); environment variables are used otherwise
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, default_value = "text")]
    log_format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    config.validate()?;

    setup_tracing(&cli.log_format, cli.verbose)?;

    tracing::info!("mulgyeol dashboard starting");

    mulgyeol::ui::run(config).await?;

    tracing::info!("mulgyeol exited");
    Ok(())
}

// Logs go to stderr so the alternate-screen UI stays intact; redirect with
// `2>mulgyeol.log` to capture them.
fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("mulgyeol=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("mulgyeol=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
