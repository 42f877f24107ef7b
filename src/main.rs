use std::io::Write;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::info;

use antlion::config::Config;
use antlion::{plot, sequence, Args};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("antlion=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if let Some(shell) = args.completions {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    if args.init_config {
        let path = Config::init_default_config().context("failed to write default config")?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    // Load or create config, CLI flags on top
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_from_default_path().unwrap_or_default(),
    };
    config.merge_args(&args);

    // Clap guarantees presence when no early-exit flag was given.
    let n = args.n.context("missing starting value")?;
    info!("computing Collatz trajectory for {}", n);
    let seq = sequence::collatz_sequence(n)?;

    // Report the numbers before touching the plot backend, so they
    // survive a rendering failure.
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    sequence::print_summary(&seq, &mut out)?;
    out.flush()?;

    plot::render(&seq, &config)
        .with_context(|| format!("failed to render {}", config.output.path.display()))?;
    info!("wrote plot to {}", config.output.path.display());
    println!("Saved plot to {}", config.output.path.display());

    Ok(())
}
