mod args;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use colored::Colorize;
use listing::{Candidate, Config, PartialConfig, WallpaperError};
use runner::{Notifier, SilentNotifier, SystemOrchestrator};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

use args::{Cli, Commands};

const WORKSPACE_CRATES: [&str; 5] = ["wallfetch", "listing", "sources", "pipeline", "runner"];

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dispatch(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(exit_status(&e))
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            let directives: Vec<String> = WORKSPACE_CRATES
                .iter()
                .map(|krate| format!("{krate}=debug"))
                .collect();
            EnvFilter::new(format!("info,{}", directives.join(",")))
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// 2 when nothing matched, 1 for every other failure.
fn exit_status(err: &anyhow::Error) -> u8 {
    let empty = err.chain().any(|e| {
        matches!(e.downcast_ref::<WallpaperError>(), Some(WallpaperError::EmptySelection))
    });
    if empty { 2 } else { 1 }
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let work = execute(cli.command, config);

    match cli.timeout {
        Some(seconds) => tokio::time::timeout(Duration::from_secs(seconds), work)
            .await
            .map_err(|_| anyhow!("timed out after {seconds}s"))?,
        None => work.await,
    }
}

async fn execute(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Run { no_notify, .. } => {
            let orchestrator = SystemOrchestrator::system(config)?;
            if no_notify {
                handle_run(orchestrator.with_notifier(SilentNotifier)).await
            } else {
                handle_run(orchestrator).await
            }
        }
        Commands::Select { .. } => handle_select(SystemOrchestrator::system(config)?).await,
        Commands::Config { .. } => handle_config(&config),
    }
}

/// Defaults, then the config file, then command-line flags.
fn load_config(cli: &Cli) -> Result<Config> {
    let file = match &cli.config {
        Some(path) => PartialConfig::load_from_file(path)?,
        None => PartialConfig::load_default_file()?,
    };
    let overrides = cli.command.selection().to_partial();

    Config::from_partial(&file.merge(&overrides)).context("Invalid configuration")
}

/// Handle the 'run' command
async fn handle_run<N: Notifier>(orchestrator: SystemOrchestrator<N>) -> Result<()> {
    let start = Instant::now();
    let outcome = orchestrator.run().await?;

    println!("{} Wallpaper applied in {:.2?}", "✓".green(), start.elapsed());
    print_wallpaper(&outcome.wallpaper);
    println!("  {} {}", "saved:".dimmed(), outcome.path.display());
    Ok(())
}

/// Handle the 'select' command
async fn handle_select(orchestrator: SystemOrchestrator) -> Result<()> {
    let winner = orchestrator.select().await?;
    print_wallpaper(&winner);
    Ok(())
}

/// Handle the 'config' command
fn handle_config(config: &Config) -> Result<()> {
    let json = serde_json::to_string_pretty(config).context("Failed to serialize configuration")?;
    println!("{json}");
    Ok(())
}

fn print_wallpaper(wallpaper: &Candidate) {
    let title = if wallpaper.title.is_empty() {
        wallpaper.url.as_str()
    } else {
        wallpaper.title.as_str()
    };
    println!("{}", title.bold().blue());
    println!(
        "  {} r/{}  {} {}",
        "from:".dimmed(),
        wallpaper.source_id,
        "score:".dimmed(),
        wallpaper.score.to_string().green()
    );
    if let Some(resolution) = wallpaper.resolution {
        println!("  {} {}", "size:".dimmed(), resolution);
    }
    println!("  {} {}", "url:".dimmed(), wallpaper.url);
    if !wallpaper.permalink.is_empty() {
        println!("  {} {}", "post:".dimmed(), wallpaper.permalink);
    }
}
