use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use ffx::{
    config::Config,
    transcoder::{TranscodeCommand, DEFAULT_PROGRAM},
    FilterChain,
};

#[derive(Parser)]
#[command(
    name = "ffx",
    version,
    about = "Apply a configured chain of video filters with FFmpeg",
    long_about = "ffx reads an effects configuration (ffx.yaml by default), builds a single FFmpeg filter chain from the enabled sections and runs FFmpeg on the input, copying the audio stream unchanged."
)]
struct Cli {
    /// Input video file
    input: PathBuf,

    /// Output video file
    output: PathBuf,

    /// Configuration file (YAML or TOML). Defaults to ffx.yaml in the
    /// working directory, then next to the executable
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// FFmpeg binary to run
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    ffmpeg: String,

    /// Print the filter chain and command without running FFmpeg
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting ffx v{}", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.unwrap_or_else(Config::default_path);
    info!("Loading configuration from {:?}", config_path);
    let config = Config::from_file(&config_path).map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let chain = FilterChain::build(&config);

    println!("Using filter chain:");
    println!("{}", chain);
    println!();

    let command = TranscodeCommand::new(cli.input, cli.output, &chain).with_program(cli.ffmpeg);

    println!("Executing FFmpeg…");
    println!("{}", command.command_line());
    println!();

    if cli.dry_run {
        info!("Dry run, FFmpeg not started");
        return Ok(());
    }

    command
        .run()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    Ok(())
}
