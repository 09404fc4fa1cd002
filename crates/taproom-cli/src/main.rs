//! Taproom CLI - form checks and page actions for the beer review site
//!
//! Runs the same password, email and confirmation checks the site's forms
//! use, replays recorded form sessions, and performs the small page actions
//! (liking a review, building share links, rendering ratings) from a shell.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    control::set_override(cli.use_color());

    let result = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => {
            if let Err(e) = init_logging(&cli, &config) {
                eprintln!("Failed to initialize logging: {}", e);
            }
            run(cli, config).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", error::format_error(&e, control::SHOULD_COLORIZE.should_colorize()));

            if e.should_show_help() {
                eprintln!("\nFor more information, try 'taproom like --help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
async fn run(cli: Cli, config: Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let mut output = OutputWriter::new(
        output_format(&cli, &config),
        cli.use_color() && config.output.color,
        cli.quiet,
        config.output.progress,
    );

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::Password(args) => handlers::handle_password(args, &mut output),
        Commands::Email(args) => handlers::handle_email(args, &mut output),
        Commands::Confirm(args) => handlers::handle_confirm(args, &mut output),
        Commands::Validate(args) => handlers::handle_validate(args, &mut output),
        Commands::Like(args) => handlers::handle_like(args, &config, &mut output).await,
        Commands::Share(args) => handlers::handle_share(args, &config, &mut output),
        Commands::Stars(args) => handlers::handle_stars(args, &mut output),
        Commands::Config(args) => handlers::handle_config(args, &config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// The `--output` flag wins unless left at its default, then the config file decides
fn output_format(cli: &Cli, config: &Config) -> OutputFormat {
    if cli.output != OutputFormat::Human {
        return cli.output;
    }
    OutputFormat::from_config(&config.output.format).unwrap_or_else(|| {
        tracing::warn!(format = %config.output.format, "Unknown output format in config");
        OutputFormat::Human
    })
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = cli.verbosity_level();
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);
    logging_config.merge_with_file(&config.logging, verbosity);
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
