//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "repogen",
    bin_name = "repogen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Repository & unit-of-work boilerplate generator",
    long_about = "Repogen scans a layered project for domain entities and \
                  generates the matching repository interfaces, implementations, \
                  and unit-of-work plumbing. Existing files are never overwritten.",
    after_help = "EXAMPLES:\n\
        \x20 repogen generate ./Shop\n\
        \x20 repogen generate ./Shop --dry-run\n\
        \x20 repogen generate ./Shop --context ShopDbContext\n\
        \x20 repogen completions bash > /usr/share/bash-completion/completions/repogen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate repositories and unit-of-work for a project.
    #[command(
        visible_alias = "gen",
        about = "Generate repository boilerplate",
        after_help = "EXAMPLES:\n\
            \x20 repogen generate ./Shop\n\
            \x20 repogen generate ./Shop --dry-run\n\
            \x20 repogen generate . --context BillingDbContext"
    )]
    Generate(GenerateArgs),

    /// Initialise a Repogen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 repogen init\n\
            \x20 repogen init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 repogen completions bash > ~/.local/share/bash-completion/completions/repogen\n\
            \x20 repogen completions zsh  > ~/.zfunc/_repogen\n\
            \x20 repogen completions fish > ~/.config/fish/completions/repogen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Repogen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 repogen config get defaults.context_class\n\
            \x20 repogen config list\n\
            \x20 repogen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `repogen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project root directory.  Its base name becomes the namespace
    /// substituted into every generated file.
    #[arg(value_name = "PATH", default_value = ".", help = "Project root directory")]
    pub path: PathBuf,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Context class used when the Context directory is missing or empty.
    #[arg(
        long = "context",
        value_name = "CLASS",
        help = "Fallback persistence-context class name"
    )]
    pub context: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `repogen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `repogen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `repogen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.context_class`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
