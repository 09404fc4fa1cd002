//! HTTP plumbing for the site's AJAX endpoints
//!
//! - `client`: the reqwest-backed like toggle
//! - `error`: classification of failed requests

pub mod client;
pub mod error;

pub use client::{SiteClient, SiteConfig};
pub use error::{ErrorClassification, HttpError};

// Re-export commonly used types
pub use reqwest::StatusCode;
