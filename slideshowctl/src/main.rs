use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slideshowctl::{RunConfig, parse_script, run_script};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(
    name = "slideshowctl",
    version,
    about = "Drive the slideshow transition engine from a script"
)]
struct Cli {
    /// Log filter, e.g. `debug` or `slideshow_core=trace` (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a command script against an in-memory deck
    Run {
        /// Number of slides in the deck
        #[arg(long, default_value_t = 5)]
        items: usize,
        /// Slide that starts out active
        #[arg(long, default_value_t = 0)]
        active: usize,
        /// Options file (TOML or JSON); defaults to SLIDESHOW_CONFIG_PATH /
        /// SLIDESHOW_CONFIG_JSON
        #[arg(long)]
        options: Option<PathBuf>,
        /// Stop at the first failing command with a non-zero exit status
        #[arg(long)]
        strict: bool,
        /// Script file, or `-` for stdin
        script: PathBuf,
    },
    /// Validate an options file
    CheckConfig {
        file: PathBuf,
    },
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
        }
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_script(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read script from stdin")?;
        return Ok(source);
    }
    fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.command {
        Command::Run {
            items,
            active,
            options,
            strict,
            script,
        } => {
            let options = match options {
                Some(path) => slideshow_config::load_from_file(&path)
                    .with_context(|| {
                        format!("failed to load options {}", path.display())
                    })?,
                None => slideshow_config::load_from_env()
                    .context("failed to load options from environment")?
                    .options,
            };
            let commands = parse_script(&read_script(&script)?)?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            let report = run_script(
                &commands,
                RunConfig {
                    items,
                    active,
                    options,
                    strict,
                },
                &mut out,
            )?;

            writeln!(out, "state {} offset={}", report.loading, report.offset)?;
            writeln!(out, "deck {}", report.deck)?;
            if report.failures > 0 {
                info!(failures = report.failures, "script finished with failures");
            }
        }
        Command::CheckConfig { file } => {
            let options = slideshow_config::load_from_file(&file)
                .with_context(|| format!("invalid options {}", file.display()))?;
            println!("{} is valid", file.display());
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
    }

    Ok(())
}
