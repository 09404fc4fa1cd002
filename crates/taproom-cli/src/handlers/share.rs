//! Share link handler

use crate::cli::{OutputFormat, ShareArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use taproom_core::page::share::{absolute_page_url, SHARE_WINDOW_FEATURES, SHARE_WINDOW_TARGET};
use taproom_core::page::share_url;

/// Handle the share command
pub fn handle_share(args: ShareArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    // Relative paths resolve against the site root; absolute URLs pass through
    let page = absolute_page_url(&config.site.base_url, &args.url)?;
    let target: taproom_core::ShareTarget = args.target.into();
    let link = share_url(target, page.as_str(), &args.text);

    if output.format() == OutputFormat::Human {
        output.writeln(&link)
    } else {
        output.data(&serde_json::json!({
            "target": target,
            "page_url": page.as_str(),
            "share_url": link,
            "window_target": SHARE_WINDOW_TARGET,
            "window_features": SHARE_WINDOW_FEATURES,
        }))
    }
}
