//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat, ConfigGetArgs, ConfigGetFormat, ConfigInitArgs, ConfigShowArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::redaction;
use crate::output::OutputWriter;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
        ConfigAction::Get(get_args) => handle_config_get(get_args, config, output),
        ConfigAction::Path => handle_config_path(output),
    }
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    let path = if args.user {
        Config::user_config_path()
            .ok_or_else(|| Error::config("Unable to determine user config directory"))?
    } else {
        Config::project_config_path()
    };

    if path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ))?;
        return Ok(());
    }

    Config::default().save(&path)?;
    output.success(&format!("✓ Created config at {}", path.display()))?;
    output.info("Edit it to point site.base_url at your Taproom instance.")?;
    Ok(())
}

/// Handle config show subcommand
///
/// Cookies are masked; use `config get site.cookie` to see the raw value.
fn handle_config_show(args: ConfigShowArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let mut shown = config.clone();
    if shown.site.cookie.is_some() {
        shown.site.cookie = Some(redaction::MASK.to_string());
    }

    let content = match args.format {
        ConfigFormat::Toml => toml::to_string_pretty(&shown)
            .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e)))?,
        ConfigFormat::Json => serde_json::to_string_pretty(&shown)?,
        ConfigFormat::Yaml => serde_yaml::to_string(&shown)?,
    };

    output.writeln(content.trim_end())
}

/// Handle config get subcommand
fn handle_config_get(args: ConfigGetArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let value = config.get_value(&args.key)?;

    match args.format {
        ConfigGetFormat::Value => output.writeln(&value),
        ConfigGetFormat::Json => {
            let json_value = serde_json::json!({
                "key": args.key,
                "value": value
            });
            output.writeln(&serde_json::to_string_pretty(&json_value)?)
        }
    }
}

/// Handle config path subcommand
fn handle_config_path(output: &mut OutputWriter) -> Result<()> {
    for path in Config::default_config_paths() {
        let marker = if path.exists() { "✓" } else { "✗" };
        output.writeln(&format!("{} {}", marker, path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::cell::RefCell;
    use std::io::Write;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Captured(Rc<RefCell<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_show_masks_cookie() {
        let mut config = Config::default();
        config.site.cookie = Some("csrftoken=abc; sessionid=def".to_string());

        let captured = Captured::default();
        let mut output =
            OutputWriter::with_writer(OutputFormat::Human, false, false, Box::new(captured.clone()));
        handle_config_show(
            ConfigShowArgs {
                format: ConfigFormat::Json,
            },
            &config,
            &mut output,
        )
        .unwrap();

        let shown: serde_json::Value =
            serde_json::from_slice(&captured.0.borrow()).unwrap();
        assert_eq!(shown["site"]["cookie"], "***");
        assert_eq!(shown["site"]["csrf_cookie_name"], "csrftoken");
    }

    #[test]
    fn test_get_unknown_key() {
        let mut output =
            OutputWriter::with_writer(OutputFormat::Human, false, false, Box::new(std::io::sink()));
        let err = handle_config_get(
            ConfigGetArgs {
                key: "site.nope".to_string(),
                format: ConfigGetFormat::Value,
            },
            &Config::default(),
            &mut output,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }
}
