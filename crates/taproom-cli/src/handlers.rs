//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod check;
mod completions;
mod config;
mod like;
mod share;
mod stars;
mod utils;
mod validate;

pub use check::{handle_confirm, handle_email, handle_password};
pub use completions::handle_completions;
pub use config::handle_config;
pub use like::handle_like;
pub use share::handle_share;
pub use stars::handle_stars;
pub use validate::handle_validate;
