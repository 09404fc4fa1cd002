use tracing::Level;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter,
};
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Install the panic hook and route `tracing` output to the browser console
///
/// Safe to call more than once; later calls keep the first subscriber.
#[wasm_bindgen]
pub fn init(log_level: Option<LogLevel>) {
    console_error_panic_hook::set_once();

    let level: Level = log_level.unwrap_or(LogLevel::Warn).into();
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy("");

    let fmt = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_span_events(FmtSpan::NONE)
        .with_writer(MakeWebConsoleWriter::new());

    // Err only means a subscriber is already installed
    let _ = tracing_subscriber::registry().with(filter).with(fmt).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_conversion() {
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
    }
}
