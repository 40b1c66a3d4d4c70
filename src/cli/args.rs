use crate::constants::verbosity;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for goproject.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration directory [default: ~/.config/goproject].
    #[arg(long = "config-dir", value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the configuration directory with a starter template.
    Init,
    /// Generate a project from a template.
    New(NewArgs),
    /// Generate a project with a single main.go, no template needed.
    Simple(SimpleArgs),
    /// List available templates.
    List,
}

/// Options shared by the generating commands.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Prefix of the module path, e.g. `github.com/user`.
    #[arg(long = "git-prefix", value_name = "PREFIX", default_value = "")]
    pub git_prefix: String,

    /// Use the `git` executable instead of the built-in git library.
    #[arg(long = "git-cli")]
    pub git_cli: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Name of a custom or built-in template.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Name of the project directory to create.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    #[command(flatten)]
    pub options: GenerateOptions,
}

#[derive(Args, Debug, Clone)]
pub struct SimpleArgs {
    /// Name of the project directory to create.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    #[command(flatten)]
    pub options: GenerateOptions,
}

/// Parse command line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
