//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// tailwindcss-bin - Tailwind CSS standalone executable provisioner
///
/// Downloads the Tailwind CSS executable for this platform on first use,
/// caches where it lives, and prints the commands that run it.
#[derive(Parser, Debug)]
#[command(name = "tailwindcss-bin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TAILWINDCSS_BIN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use this executable instead of downloading one
    #[arg(long, global = true, env = "TAILWINDCSS_BIN_PATH")]
    pub bin_path: Option<PathBuf>,

    /// Directory to download the executable into
    #[arg(long, global = true, env = "TAILWINDCSS_BIN_DIR")]
    pub bin_dir: Option<PathBuf>,

    /// Cache directory for resolved paths
    #[arg(long, global = true, env = "TAILWINDCSS_BIN_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the executable path, downloading it if needed
    Path,

    /// Download the executable if needed and report where it is
    Install,

    /// Print the command that runs Tailwind CSS in watch mode
    Watch(CommandArgs),

    /// Print the command that runs a single Tailwind CSS build
    Build(BuildArgs),

    /// Show the detected platform and its release asset
    Platform,

    /// Manage the resolved-path cache
    Cache(CacheArgs),

    /// Show configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Input/output files for a generated command
#[derive(Parser, Debug)]
pub struct CommandArgs {
    /// Input CSS file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output CSS file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the build command
#[derive(Parser, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub files: CommandArgs,

    /// Minify the output
    #[arg(short, long)]
    pub minify: bool,
}

/// Output format for generated commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One argument per line
    Plain,
    /// JSON array
    Json,
}

/// Arguments for the cache command
#[derive(Parser, Debug)]
pub struct CacheArgs {
    /// Subcommand for cache
    #[command(subcommand)]
    pub action: CacheAction,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Print the cache directory
    Dir,

    /// Remove all cache entries (downloaded executables are kept)
    Clear,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_watch() {
        let cli = Cli::parse_from(["tailwindcss-bin", "watch", "-i", "in.css", "-o", "out.css"]);
        match cli.command {
            Commands::Watch(args) => {
                assert_eq!(args.input, PathBuf::from("in.css"));
                assert_eq!(args.output, PathBuf::from("out.css"));
                assert_eq!(args.format, OutputFormat::Plain);
            }
            _ => panic!("expected Watch command"),
        }
    }

    #[test]
    fn cli_parses_build_minify() {
        let cli = Cli::parse_from([
            "tailwindcss-bin",
            "build",
            "--input",
            "in.css",
            "--output",
            "out.css",
            "--minify",
            "--format",
            "json",
        ]);
        match cli.command {
            Commands::Build(args) => {
                assert!(args.minify);
                assert_eq!(args.files.format, OutputFormat::Json);
            }
            _ => panic!("expected Build command"),
        }
    }

    #[test]
    fn watch_requires_files() {
        assert!(Cli::try_parse_from(["tailwindcss-bin", "watch", "-i", "in.css"]).is_err());
    }

    #[test]
    fn cli_parses_cache_clear() {
        let cli = Cli::parse_from(["tailwindcss-bin", "cache", "clear"]);
        match cli.command {
            Commands::Cache(args) => assert!(matches!(args.action, CacheAction::Clear)),
            _ => panic!("expected Cache command"),
        }
    }

    #[test]
    fn global_overrides_after_subcommand() {
        let cli = Cli::parse_from([
            "tailwindcss-bin",
            "path",
            "--bin-dir",
            "/srv/bin",
            "--cache-dir",
            "/tmp/tw",
        ]);
        assert!(matches!(cli.command, Commands::Path));
        assert_eq!(cli.bin_dir, Some(PathBuf::from("/srv/bin")));
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/tw")));
    }

    #[test]
    fn cli_verbose_levels() {
        let cli = Cli::parse_from(["tailwindcss-bin", "-vv", "platform"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parses_completions() {
        let cli = Cli::parse_from(["tailwindcss-bin", "completions", "bash"]);
        assert!(matches!(cli.command, Commands::Completions { shell: Shell::Bash }));
    }
}
