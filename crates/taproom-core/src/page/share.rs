//! Social sharing links and clipboard feedback

use super::toast::{Toast, ToastKind};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Window features of the share popup
pub const SHARE_WINDOW_FEATURES: &str = "width=600,height=400";

/// Window target of the share popup
pub const SHARE_WINDOW_TARGET: &str = "_blank";

const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareTarget {
    Twitter,
    Facebook,
}

impl fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareTarget::Twitter => write!(f, "twitter"),
            ShareTarget::Facebook => write!(f, "facebook"),
        }
    }
}

/// Percent-encode a query component the way `encodeURIComponent` does
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Tweet intent for a page URL and accompanying text
pub fn twitter_share_url(url: &str, text: &str) -> String {
    format!(
        "{}?url={}&text={}",
        TWITTER_INTENT,
        encode_component(url),
        encode_component(text)
    )
}

/// Facebook sharer link for a page URL
pub fn facebook_share_url(url: &str) -> String {
    format!("{}?u={}", FACEBOOK_SHARER, encode_component(url))
}

/// Share link for a target; Facebook ignores `text`
pub fn share_url(target: ShareTarget, url: &str, text: &str) -> String {
    match target {
        ShareTarget::Twitter => twitter_share_url(url, text),
        ShareTarget::Facebook => facebook_share_url(url),
    }
}

/// Resolve a review path such as `/reviews/42/` against the site root
pub fn absolute_page_url(base_url: &str, path: &str) -> crate::Result<Url> {
    let base = Url::parse(base_url).map_err(|e| crate::Error::Configuration {
        message: format!("Invalid site URL '{}': {}", base_url, e),
        source: Some(anyhow::Error::new(e)),
    })?;
    base.join(path).map_err(|e| crate::Error::Configuration {
        message: format!("Cannot resolve '{}' against '{}': {}", path, base_url, e),
        source: Some(anyhow::Error::new(e)),
    })
}

/// Toast shown after an attempt to copy a link to the clipboard
pub fn clipboard_toast(copied: bool) -> Toast {
    if copied {
        Toast::new("Link copied to clipboard!", ToastKind::Success)
    } else {
        Toast::new("Failed to copy link", ToastKind::Error)
    }
}
