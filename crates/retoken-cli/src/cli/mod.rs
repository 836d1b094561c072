//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "retoken",
    bin_name = "retoken",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Replace #{token}# placeholders in files",
    long_about = "retoken replaces prefix + key + suffix placeholders in text files \
                  with values read from JSON token files and GitHub environment variables.",
    after_help = "EXAMPLES:\n\
        \x20 retoken replace --files appsettings.json --token-value-files tokens.json\n\
        \x20 retoken replace --files '[\"a.config\",\"b.config\"]' --environment production\n\
        \x20 retoken resolve --token-value-files tokens.json --format json\n\
        \x20 retoken completions bash > /usr/share/bash-completion/completions/retoken",
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
    /// Replace placeholders in files.
    #[command(
        visible_alias = "r",
        about = "Replace tokens in files",
        after_help = "EXAMPLES:\n\
            \x20 retoken replace -f app.config -t tokens.json\n\
            \x20 retoken replace -f 'config/**/*.json' -t base.json -t prod.json\n\
            \x20 retoken replace -f app.config -e staging --repository owner/repo\n\
            \x20 retoken replace -f app.config -t tokens.json --prefix '${' --suffix '}$'"
    )]
    Replace(ReplaceArgs),

    /// Print the merged and resolved token set.
    #[command(
        about = "Show resolved tokens",
        after_help = "EXAMPLES:\n\
            \x20 retoken resolve -t tokens.json\n\
            \x20 retoken resolve -t base.json -t prod.json --format json"
    )]
    Resolve(ResolveArgs),

    /// Initialise a retoken configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 retoken init           # default location\n\
            \x20 retoken init --local   # .retoken.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 retoken completions bash > ~/.local/share/bash-completion/completions/retoken\n\
            \x20 retoken completions zsh  > ~/.zfunc/_retoken\n\
            \x20 retoken completions fish > ~/.config/fish/completions/retoken.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the retoken configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 retoken config get tokens.prefix\n\
            \x20 retoken config list\n\
            \x20 retoken config path"
    )]
    Config(ConfigCommands),
}

// ── token sources (shared) ────────────────────────────────────────────────────

/// Where tokens come from and how placeholders are delimited.
#[derive(Debug, Clone, Args)]
pub struct TokenArgs {
    /// JSON files holding `[{"key": ..., "value": ...}]` arrays.
    ///
    /// Each value is a path or a JSON array of paths.  Later files override
    /// earlier ones.
    #[arg(
        short = 't',
        long = "token-value-files",
        value_name = "FILE",
        num_args = 1..,
        help = "Token value files (path or JSON array of paths)"
    )]
    pub token_value_files: Vec<String>,

    /// Placeholder prefix.
    #[arg(
        long = "prefix",
        value_name = "PREFIX",
        allow_hyphen_values = true,
        help = "Token prefix [default: #{]"
    )]
    pub prefix: Option<String>,

    /// Placeholder suffix.
    #[arg(
        long = "suffix",
        value_name = "SUFFIX",
        allow_hyphen_values = true,
        help = "Token suffix [default: }#]"
    )]
    pub suffix: Option<String>,

    /// GitHub deployment environment to read variables from.
    #[arg(
        short = 'e',
        long = "environment",
        value_name = "NAME",
        help = "GitHub environment whose variables become tokens"
    )]
    pub environment: Option<String>,

    /// Token used to call the GitHub API.
    #[arg(
        long = "repo-token",
        value_name = "TOKEN",
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        help = "GitHub token (required with --environment)"
    )]
    pub repo_token: Option<String>,

    /// Repository owning the environment.
    #[arg(
        long = "repository",
        value_name = "OWNER/REPO",
        env = "GITHUB_REPOSITORY",
        help = "Repository that owns the environment"
    )]
    pub repository: Option<String>,

    /// GitHub API base URL (GitHub Enterprise Server).
    #[arg(
        long = "api-url",
        value_name = "URL",
        env = "GITHUB_API_URL",
        help = "GitHub API base URL"
    )]
    pub api_url: Option<String>,
}

// ── replace ───────────────────────────────────────────────────────────────────

/// Arguments for `retoken replace`.
#[derive(Debug, Clone, Args)]
pub struct ReplaceArgs {
    /// Files to rewrite.  Each value is a path, a glob pattern, or a JSON
    /// array of those.
    #[arg(
        short = 'f',
        long = "files",
        value_name = "FILE",
        env = "RETOKEN_FILES",
        num_args = 1..,
        help = "Files to replace tokens in (path, glob, or JSON array)"
    )]
    pub files: Vec<String>,

    #[command(flatten)]
    pub tokens: TokenArgs,

    /// Report what would change without writing any files.
    #[arg(long = "dry-run", help = "Show changed files without writing them")]
    pub dry_run: bool,
}

// ── resolve ───────────────────────────────────────────────────────────────────

/// Arguments for `retoken resolve`.
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub tokens: TokenArgs,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ResolveFormat,
}

/// Output format for the `resolve` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResolveFormat {
    /// `key = value` lines under a header.
    Table,
    /// One key per line.
    List,
    /// JSON array of `{key, value}` objects.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `retoken init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.retoken.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `retoken completions`.
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

/// Subcommands for `retoken config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `tokens.prefix`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
