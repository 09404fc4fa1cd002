//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with dedicated human
//! renderings for password scores, verdicts and replayed form sessions.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::logging::redaction;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;
use taproom_core::validation::PasswordRule;
use taproom_core::{FieldState, PasswordStrengthResult, ScenarioReport, ValidationVerdict, VerdictLevel};
use tracing::{debug, trace};

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a password score with its unmet requirements
    fn format_strength(&self, result: &PasswordStrengthResult) -> Result<String>;

    /// Format a single check verdict
    fn format_verdict(&self, check: &str, verdict: &ValidationVerdict) -> Result<String>;

    /// Format the report of a replayed form session
    fn format_scenario_report(&self, report: &ScenarioReport, detailed: bool) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_strength(&self, result: &PasswordStrengthResult) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_strength_human(result)),
            _ => self.format(result),
        }
    }

    fn format_verdict(&self, check: &str, verdict: &ValidationVerdict) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_verdict_human(check, verdict)),
            _ => self.format(&serde_json::json!({
                "check": check,
                "verdict": verdict,
            })),
        }
    }

    fn format_scenario_report(&self, report: &ScenarioReport, detailed: bool) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_scenario_report_human(report, detailed)),
            _ => self.format(report),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, progress: bool) -> Self {
        Self {
            format,
            use_color,
            show_progress: progress && !quiet && io::stdout().is_terminal(),
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[cfg(test)]
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            show_progress: false, // No progress bars with custom writers
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", redaction::redact_sensitive(message));

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let mut value_json = serde_json::to_value(value)?;
        redaction::redact_json_value(&mut value_json);

        trace!(
            "Outputting data: {}",
            serde_json::to_string(&value_json).unwrap_or_else(|_| "[failed to serialize]".to_string())
        );

        let formatted = self.format.format(value)?;

        if self.format == OutputFormat::Human {
            self.writeln(&formatted)
        } else {
            self.write(&formatted)
        }
    }

    /// Write a password score
    pub fn strength(&mut self, result: &PasswordStrengthResult) -> Result<()> {
        let formatted = self.format.format_strength(result)?;
        self.writeln(formatted.trim_end())
    }

    /// Write a check verdict
    pub fn verdict(&mut self, check: &str, verdict: &ValidationVerdict) -> Result<()> {
        let formatted = self.format.format_verdict(check, verdict)?;
        let formatted = if self.use_color && self.format == OutputFormat::Human {
            match verdict.level {
                VerdictLevel::Valid => formatted.green().to_string(),
                VerdictLevel::Invalid => formatted.red().to_string(),
                VerdictLevel::Neutral => formatted.dimmed().to_string(),
            }
        } else {
            formatted
        };
        self.writeln(formatted.trim_end())
    }

    /// Write a replayed form session report
    pub fn scenario_report(&mut self, report: &ScenarioReport, detailed: bool) -> Result<()> {
        let formatted = self.format.format_scenario_report(report, detailed)?;
        self.writeln(formatted.trim_end())
    }

    /// Create a spinner for indeterminate progress
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(default_spinner_style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ");

        if self.use_color {
            self.writeln(&header_row.bold().to_string())?;
        } else {
            self.writeln(&header_row)?;
        }

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        self.writeln(&separator)?;

        for row in rows {
            let row_str = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    if i < widths.len() {
                        format!("{:width$}", cell, width = widths[i])
                    } else {
                        cell.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" │ ");
            self.writeln(row_str.trim_end())?;
        }

        Ok(())
    }
}

/// Helper function to create a spinner style
pub fn default_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Rows of the rule table shown by `password --detailed`
pub fn rule_rows(password: &str) -> Vec<Vec<String>> {
    PasswordRule::ALL
        .iter()
        .map(|rule| {
            let mark = if rule.is_satisfied_by(password) { "✓" } else { "✗" };
            vec![mark.to_string(), rule.requirement().to_string()]
        })
        .collect()
}

fn format_strength_human(result: &PasswordStrengthResult) -> String {
    let mut output = String::new();
    output.push_str(&format!("Strength: {} ({}/5)\n", result.level, result.score));
    output.push_str(&format!("{}\n", result.message));
    output
}

fn format_verdict_human(check: &str, verdict: &ValidationVerdict) -> String {
    let icon = match verdict.level {
        VerdictLevel::Valid => "✓",
        VerdictLevel::Invalid => "✗",
        VerdictLevel::Neutral => "·",
    };
    if verdict.message.is_empty() {
        format!("{} {}: nothing to check", icon, check)
    } else {
        format!("{} {}: {}", icon, check, verdict.message)
    }
}

fn state_label(state: FieldState) -> &'static str {
    match state {
        FieldState::Unvalidated => "unvalidated",
        FieldState::Valid => "valid",
        FieldState::Invalid => "invalid",
        FieldState::Neutral => "neutral",
    }
}

fn format_scenario_report_human(report: &ScenarioReport, detailed: bool) -> String {
    let mut output = String::new();

    if report.submission.allowed {
        output.push_str("✅ Form would submit\n\n");
    } else {
        output.push_str("❌ Submission blocked\n\n");
    }

    for field in &report.fields {
        if !detailed && field.state == FieldState::Unvalidated {
            continue;
        }
        output.push_str(&format!("• {} [{}]\n", field.name, state_label(field.state)));
        for annotation in &field.annotations {
            output.push_str(&format!("    {}: {}\n", annotation.category, annotation.message));
        }
    }

    if !report.submission.missing_required.is_empty() {
        output.push_str(&format!(
            "\nRequired but empty: {}\n",
            report.submission.missing_required.join(", ")
        ));
    }
    if !report.submission.invalid_fields.is_empty() {
        output.push_str(&format!(
            "Invalid: {}\n",
            report.submission.invalid_fields.join(", ")
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    include!("output/tests.rs");
}
