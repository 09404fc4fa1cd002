//! Logging utilities for the Taproom CLI
//!
//! This module provides:
//! - Request ID generation and tracking
//! - Redaction of passwords, cookies and CSRF tokens
//! - Performance timing spans
//! - Structured logging setup with console or file output

use crate::config;
use crate::error::{Error, Result};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{field, Span};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Global request ID for the current session
static REQUEST_ID: OnceLock<String> = OnceLock::new();

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Output format: compact, full, json
    pub format: LogFormat,
    /// Enable console output
    pub console: bool,
    /// Optional file output path; takes the place of the console
    pub file: Option<PathBuf>,
    /// Include thread IDs
    pub thread_ids: bool,
    /// Include file and line numbers
    pub source_location: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact format for everyday use
    Compact,
    /// Full format with all details
    Full,
    /// JSON structured format
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "compact" => Some(LogFormat::Compact),
            "full" => Some(LogFormat::Full),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            console: true,
            file: None,
            thread_ids: false,
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging config from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        let mut config = Self::default();

        match verbosity {
            0 => {}
            1 => {
                config.level = "info".to_string();
            }
            2 => {
                config.level = "debug".to_string();
                config.source_location = true;
            }
            _ => {
                config.level = "trace".to_string();
                config.format = LogFormat::Full;
                config.source_location = true;
                config.thread_ids = true;
            }
        }

        config
    }

    /// Apply the `logging` section of the config file
    ///
    /// The file level only applies when no `-v` flag raised the level.
    pub fn merge_with_file(&mut self, file_config: &config::LoggingConfig, verbosity: u8) {
        if verbosity == 0 {
            self.level = file_config.level.clone();
        }
        match LogFormat::parse(&file_config.format) {
            Some(format) => self.format = format,
            None => tracing::warn!("Invalid log format in config: {}", file_config.format),
        }
        if file_config.file.is_some() {
            self.file = file_config.file.clone();
        }
    }

    /// Apply environment overrides
    pub fn merge_with_env(&mut self) {
        // RUST_LOG takes precedence
        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            self.level = rust_log;
        }

        if let Ok(format) = std::env::var("TAPROOM_LOG_FORMAT") {
            match LogFormat::parse(&format) {
                Some(format) => self.format = format,
                None => tracing::warn!("Invalid log format: {}, using default", format),
            }
        }

        if let Ok(file) = std::env::var("TAPROOM_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }

        if let Ok(console) = std::env::var("TAPROOM_LOG_CONSOLE") {
            self.console = console.to_lowercase() == "true" || console == "1";
        }
    }

    fn writer(&self) -> Result<BoxMakeWriter> {
        if let Some(path) = &self.file {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| Error::config(format!("Invalid log file path: {}", path.display())))?;
            std::fs::create_dir_all(directory)?;
            return Ok(BoxMakeWriter::new(tracing_appender::rolling::never(
                directory, file_name,
            )));
        }

        if self.console {
            Ok(BoxMakeWriter::new(std::io::stderr))
        } else {
            Ok(BoxMakeWriter::new(std::io::sink))
        }
    }

    fn use_ansi(&self) -> bool {
        self.file.is_none() && self.console && std::io::stderr().is_terminal()
    }
}

/// Initialize the global logging system
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = create_env_filter(&config)?;
    let writer = config.writer()?;

    // Different subscriber types per format
    match config.format {
        LogFormat::Compact => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_target(true)
                .with_ansi(config.use_ansi())
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .compact()
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false)
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .json()
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;
        }
        LogFormat::Full => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_target(true)
                .with_ansi(config.use_ansi())
                .with_thread_ids(config.thread_ids)
                .with_file(config.source_location)
                .with_line_number(config.source_location)
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;
        }
    }

    let request_id = generate_request_id();
    REQUEST_ID.set(request_id.clone()).map_err(|_| {
        Error::other("Failed to set request ID - request tracking may not work correctly")
    })?;

    tracing::info!(
        request_id = %request_id,
        config = ?config,
        "Logging system initialized"
    );

    Ok(())
}

/// Create environment filter based on configuration
fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.level)
        .map_err(|e| Error::config(format!("Invalid log filter '{}': {}", config.level, e)))
}

/// Generate a unique request ID for this session
pub fn generate_request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

/// Get the current request ID
pub fn current_request_id() -> Option<&'static str> {
    REQUEST_ID.get().map(|s| s.as_str())
}

/// Create a span with request ID and timing
pub fn create_operation_span(operation: &str, details: Option<&str>) -> Span {
    tracing::info_span!(
        "operation",
        operation = operation,
        request_id = current_request_id().unwrap_or("unknown"),
        details = details.unwrap_or(""),
        duration_ms = field::Empty,
    )
}

/// Redaction of credentials in logged and printed data
pub mod redaction {
    use regex::Regex;
    use std::sync::OnceLock;

    /// Replacement for redacted values
    pub const MASK: &str = "***";

    static PASSWORD_REGEX: OnceLock<Regex> = OnceLock::new();
    static COOKIE_REGEX: OnceLock<Regex> = OnceLock::new();

    fn password_regex() -> &'static Regex {
        PASSWORD_REGEX.get_or_init(|| {
            Regex::new(r#"(?i)(password[12]?|passwd|pwd)[=:\s]+['"]?([^\s'";]{3,})['"]?"#).unwrap()
        })
    }

    fn cookie_regex() -> &'static Regex {
        COOKIE_REGEX.get_or_init(|| {
            Regex::new(r#"(?i)(csrftoken|sessionid|csrf[_-]?token|x-csrftoken)[=:\s]+['"]?([^\s'";]+)['"]?"#)
                .unwrap()
        })
    }

    /// Redact sensitive information from a string
    pub fn redact_sensitive(input: &str) -> String {
        let result = password_regex().replace_all(input, "$1=***");
        cookie_regex().replace_all(&result, "$1=***").to_string()
    }

    /// Redact sensitive information from JSON values
    pub fn redact_json_value(value: &mut serde_json::Value) {
        match value {
            serde_json::Value::Object(map) => {
                // Form fields carry their name next to the value
                let field_is_secret = ["name", "field"]
                    .iter()
                    .filter_map(|k| map.get(*k).and_then(|n| n.as_str()))
                    .any(is_sensitive_key)
                    || map.get("kind").and_then(|k| k.as_str()) == Some("password");

                for (key, val) in map.iter_mut() {
                    if is_sensitive_key(key) || (field_is_secret && key == "value") {
                        *val = serde_json::Value::String(MASK.to_string());
                    } else {
                        redact_json_value(val);
                    }
                }
            }
            serde_json::Value::Array(arr) => {
                for item in arr.iter_mut() {
                    redact_json_value(item);
                }
            }
            serde_json::Value::String(s) => {
                *s = redact_sensitive(s);
            }
            _ => {}
        }
    }

    /// Check if a JSON key names a secret
    fn is_sensitive_key(key: &str) -> bool {
        let key_lower = key.to_lowercase();
        key_lower.starts_with("password")
            || key_lower.contains("passwd")
            || key_lower.contains("token")
            || (key_lower.contains("cookie") && !key_lower.ends_with("_name"))
            || key_lower.contains("secret")
    }
}

/// Performance timing utilities
pub mod timing {
    use std::time::Instant;
    use tracing::Span;

    /// A timer that logs its duration when dropped
    pub struct Timer {
        start: Instant,
        span: Span,
        operation: String,
    }

    impl Timer {
        pub fn new(operation: &str) -> Self {
            Self {
                start: Instant::now(),
                span: super::create_operation_span(operation, None),
                operation: operation.to_string(),
            }
        }

        pub fn with_details(operation: &str, details: &str) -> Self {
            Self {
                start: Instant::now(),
                span: super::create_operation_span(operation, Some(details)),
                operation: operation.to_string(),
            }
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            let duration = self.start.elapsed();
            self.span.record("duration_ms", duration.as_millis() as u64);

            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration.as_millis(),
                "Operation completed"
            );
        }
    }
}
