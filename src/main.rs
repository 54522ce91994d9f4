//! tailwindcss-bin - Tailwind CSS standalone executable provisioner
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use std::process::ExitCode;
use tailwindcss_bin::cli::{commands, Cli, Commands, Settings};
use tailwindcss_bin::config::ConfigManager;
use tailwindcss_bin::error::TailwindResult;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> TailwindResult<()> {
    let cli = Cli::parse();

    // Completions never need config or logging
    if let Commands::Completions { shell } = cli.command {
        return commands::completions(shell);
    }

    let manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = manager.load()?;

    init_logging(cli.verbose, &config.general.log_format);
    debug!("Loaded config from {}", manager.path().display());

    let settings = Settings::merge(&cli, &config);

    match cli.command {
        Commands::Completions { .. } => unreachable!("Completions handled above"),
        Commands::Path => commands::path(&settings),
        Commands::Install => commands::install(&settings),
        Commands::Watch(args) => commands::watch(args, &settings),
        Commands::Build(args) => commands::build(args, &settings),
        Commands::Platform => commands::platform(),
        Commands::Cache(args) => commands::cache(args, &settings),
        Commands::Config(args) => commands::config(args, &manager, &config),
    }
}

/// 0 = warn, 1 = info, 2+ = debug; logs go to stderr
fn init_logging(verbose: u8, format: &str) {
    let filter = match verbose {
        0 => EnvFilter::new("tailwindcss_bin=warn"),
        1 => EnvFilter::new("tailwindcss_bin=info"),
        _ => EnvFilter::new("tailwindcss_bin=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
