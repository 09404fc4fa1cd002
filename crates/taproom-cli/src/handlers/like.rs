//! Like toggle handler

use crate::cli::{LikeArgs, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use taproom_core::page::get_cookie;
use taproom_core::{LikeButton, SiteClient};

/// Handle the like command
pub async fn handle_like(args: LikeArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let mut site = config.site_config();
    if let Some(base_url) = args.base_url {
        site.base_url = base_url;
    }

    let cookie = args
        .cookie
        .or_else(|| config.site.cookie.clone())
        .unwrap_or_default();
    if get_cookie(&cookie, &site.csrf_cookie_name).is_none() {
        return Err(Error::MissingCsrfToken);
    }

    let client = SiteClient::new(site)?;
    let mut button = LikeButton::new(args.review_id, args.liked, args.count);

    let spinner = output.spinner(&format!("Toggling like on review {}...", args.review_id));
    let result = {
        let _timer = Timer::with_details("like", &client.like_url(args.review_id));
        client.toggle_button(&mut button, &cookie).await
    };
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    result?;

    if output.format() == OutputFormat::Human {
        let verb = if button.is_liked() { "Liked" } else { "Unliked" };
        let message = match button.like_count() {
            Some(count) => format!("♥ {} review {} ({} likes)", verb, args.review_id, count),
            None => format!("♥ {} review {}", verb, args.review_id),
        };
        output.success(&message)
    } else {
        output.data(&serde_json::json!({
            "review_id": button.review_id,
            "liked": button.is_liked(),
            "like_count": button.like_count(),
            "icon": button.icon().class_name(),
            "button": button.button_classes(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_csrf_token_fails_before_request() {
        let mut config = Config::default();
        config.site.cookie = Some("sessionid=abc".to_string());

        let mut output =
            OutputWriter::with_writer(OutputFormat::Json, false, true, Box::new(std::io::sink()));
        let err = handle_like(
            LikeArgs {
                review_id: 1,
                cookie: None,
                base_url: Some("http://127.0.0.1:9".to_string()),
                liked: false,
                count: None,
            },
            &config,
            &mut output,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::MissingCsrfToken));
    }
}
