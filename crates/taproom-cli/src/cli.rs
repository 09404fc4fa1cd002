//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Taproom CLI - form checks and review actions for the Taproom beer-review site
///
/// Runs the same password, email and confirmation checks the site's forms
/// run in the browser, replays recorded form sessions, and talks to the
/// site's like endpoint.
#[derive(Parser, Debug)]
#[command(
    name = "taproom",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TAPROOM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a password against the strength rules
    Password(PasswordArgs),

    /// Check an email address the way the signup form does
    Email(EmailArgs),

    /// Check that a confirmation matches its password
    Confirm(ConfirmArgs),

    /// Replay a recorded form session and report whether it would submit
    Validate(ValidateArgs),

    /// Toggle your like on a review
    Like(LikeArgs),

    /// Build a social share link for a page
    Share(ShareArgs),

    /// Render the star icons for a rating
    Stars(StarsArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the password command
#[derive(Parser, Debug)]
pub struct PasswordArgs {
    /// Password to score; read from TAPROOM_PASSWORD when omitted
    #[arg(value_name = "PASSWORD", env = "TAPROOM_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// List every rule with its status
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the email command
#[derive(Parser, Debug)]
pub struct EmailArgs {
    /// Address to check
    #[arg(value_name = "EMAIL")]
    pub email: String,
}

/// Arguments for the confirm command
#[derive(Parser, Debug)]
pub struct ConfirmArgs {
    /// The password as first typed
    #[arg(value_name = "PASSWORD")]
    pub password: String,

    /// The confirmation as typed second
    #[arg(value_name = "CONFIRMATION")]
    pub confirmation: String,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the form session file (JSON or YAML)
    #[arg(value_name = "FORM_SESSION")]
    pub session: PathBuf,

    /// Include hidden annotations and unvalidated fields in the report
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the like command
#[derive(Parser, Debug)]
pub struct LikeArgs {
    /// Review to like or unlike
    #[arg(value_name = "REVIEW_ID")]
    pub review_id: u64,

    /// Browser cookie string carrying the session and CSRF cookies
    #[arg(long, env = "TAPROOM_COOKIE", hide_env_values = true)]
    pub cookie: Option<String>,

    /// Site root override
    #[arg(long)]
    pub base_url: Option<String>,

    /// Whether the review is currently liked, for the icon transition
    #[arg(long)]
    pub liked: bool,

    /// Current like count, if the page shows one
    #[arg(long)]
    pub count: Option<u64>,
}

/// Arguments for the share command
#[derive(Parser, Debug)]
pub struct ShareArgs {
    /// Network to share on
    #[arg(value_enum)]
    pub target: ShareTarget,

    /// Page URL, absolute or relative to the configured site root
    #[arg(value_name = "URL")]
    pub url: String,

    /// Text accompanying the link (Twitter only)
    #[arg(long, default_value = "")]
    pub text: String,
}

/// Arguments for the stars command
#[derive(Parser, Debug)]
pub struct StarsArgs {
    /// Rating as shown in the page's data-rating attribute
    #[arg(value_name = "RATING", allow_hyphen_values = true)]
    pub rating: String,

    /// Number of stars in the widget
    #[arg(long, default_value_t = taproom_core::page::STAR_COUNT)]
    pub count: usize,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a configuration file with default values
    Init(ConfigInitArgs),

    /// Show current configuration values
    Show(ConfigShowArgs),

    /// Get a configuration value
    Get(ConfigGetArgs),

    /// Print the configuration file locations that are searched
    Path,
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Write the user config (~/.config/taproom/config.yaml) instead of ./.taproom.yaml
    #[arg(long)]
    pub user: bool,

    /// Force overwrite existing config files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: ConfigFormat,
}

/// Arguments for config get
#[derive(Parser, Debug)]
pub struct ConfigGetArgs {
    /// Configuration key (e.g., site.base_url, output.format)
    pub key: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "value")]
    pub format: ConfigGetFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Configuration get output formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigGetFormat {
    /// Just the value
    Value,
    /// JSON formatted
    Json,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

impl OutputFormat {
    /// Parse the `output.format` config value
    pub fn from_config(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, true).ok()
    }
}

/// Share networks
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShareTarget {
    Twitter,
    Facebook,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<ShareTarget> for taproom_core::ShareTarget {
    fn from(target: ShareTarget) -> Self {
        match target {
            ShareTarget::Twitter => taproom_core::ShareTarget::Twitter,
            ShareTarget::Facebook => taproom_core::ShareTarget::Facebook,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
