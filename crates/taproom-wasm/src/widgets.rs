//! Page widgets: like button, share links, rating stars, toasts, newsletter

use crate::to_js;
use std::collections::BTreeMap;
use taproom_core::page::{
    self, LikeButton, LikeResponse, NewsletterButton, ShareTarget, Toast, ToastKind,
};
use wasm_bindgen::prelude::*;

/// Value for the `X-CSRFToken` header, read from `document.cookie`
#[wasm_bindgen(js_name = csrfToken)]
pub fn csrf_token(cookie: &str) -> Option<String> {
    page::csrf_token(cookie)
}

#[wasm_bindgen(js_name = twitterShareUrl)]
pub fn twitter_share_url(url: &str, text: &str) -> String {
    page::twitter_share_url(url, text)
}

#[wasm_bindgen(js_name = facebookShareUrl)]
pub fn facebook_share_url(url: &str) -> String {
    page::facebook_share_url(url)
}

/// Share link for `"twitter"` or `"facebook"`
#[wasm_bindgen(js_name = shareUrl)]
pub fn share_url(target: &str, url: &str, text: &str) -> Result<String, JsError> {
    Ok(page::share_url(parse_share_target(target)?, url, text))
}

fn parse_share_target(target: &str) -> Result<ShareTarget, JsError> {
    match target {
        "twitter" => Ok(ShareTarget::Twitter),
        "facebook" => Ok(ShareTarget::Facebook),
        other => Err(JsError::new(&format!("Unknown share target: {}", other))),
    }
}

/// Icon classes for a rating widget, one per star
#[wasm_bindgen(js_name = starClasses)]
pub fn star_classes(rating: &str, count: Option<usize>) -> Vec<String> {
    page::render_rating_attribute(rating, count.unwrap_or(page::STAR_COUNT))
        .iter()
        .map(|star| star.class_name().to_owned())
        .collect()
}

/// `{ message, kind, classList, aria, container }` for a toast element
#[wasm_bindgen(js_name = toast)]
pub fn toast(message: &str, kind: Option<String>) -> Result<JsValue, JsError> {
    let kind = match kind.as_deref() {
        None => ToastKind::Info,
        Some(kind) => parse_toast_kind(kind)?,
    };
    to_js(&ToastView::from(Toast::new(message, kind)))
}

/// Toast after a clipboard copy attempt
#[wasm_bindgen(js_name = clipboardToast)]
pub fn clipboard_toast(copied: bool) -> Result<JsValue, JsError> {
    to_js(&ToastView::from(page::clipboard_toast(copied)))
}

fn parse_toast_kind(kind: &str) -> Result<ToastKind, JsError> {
    match kind {
        "info" => Ok(ToastKind::Info),
        "success" => Ok(ToastKind::Success),
        "warning" => Ok(ToastKind::Warning),
        "error" | "danger" => Ok(ToastKind::Error),
        other => Err(JsError::new(&format!("Unknown toast kind: {}", other))),
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ToastView {
    message: String,
    kind: ToastKind,
    class_list: String,
    /// Attributes to set on the toast element
    aria: BTreeMap<&'static str, &'static str>,
    container: ToastContainerView,
}

/// The container toasts are appended to, created on first use
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ToastContainerView {
    class_list: &'static str,
    z_index: u32,
}

impl From<Toast> for ToastView {
    fn from(toast: Toast) -> Self {
        Self {
            class_list: toast.class_list(),
            aria: toast.aria_attributes().into_iter().collect(),
            container: ToastContainerView {
                class_list: page::TOAST_CONTAINER_CLASSES,
                z_index: page::TOAST_CONTAINER_Z_INDEX,
            },
            message: toast.message,
            kind: toast.kind,
        }
    }
}

/// Search text to suggest on, or undefined when too short
#[wasm_bindgen(js_name = searchSuggestionQuery)]
pub fn search_suggestion_query(input: &str) -> Option<String> {
    page::search_suggestion_query(input).map(str::to_owned)
}

/// Milliseconds before flash alerts close themselves
#[wasm_bindgen(js_name = alertDismissDelayMs)]
pub fn alert_dismiss_delay_ms() -> u32 {
    as_millis(page::ALERT_DISMISS_DELAY)
}

/// State of one like button around the `fetch` the page performs
#[wasm_bindgen]
pub struct LikeHandle {
    button: LikeButton,
}

#[wasm_bindgen]
impl LikeHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(review_id: u64, liked: bool, like_count: Option<u64>) -> LikeHandle {
        Self {
            button: LikeButton::new(review_id, liked, like_count),
        }
    }

    /// Click: switch to the loading icon
    pub fn begin(&mut self) {
        self.button.begin();
    }

    /// Apply the parsed JSON reply of the like endpoint
    pub fn apply(&mut self, response: JsValue) -> Result<(), JsError> {
        let response: LikeResponse = serde_wasm_bindgen::from_value(response)?;
        self.button.apply(response);
        Ok(())
    }

    /// Request failed: put the previous icon back
    pub fn revert(&mut self) {
        self.button.revert();
    }

    #[wasm_bindgen(getter)]
    pub fn liked(&self) -> bool {
        self.button.is_liked()
    }

    #[wasm_bindgen(getter, js_name = likeCount)]
    pub fn like_count(&self) -> Option<u64> {
        self.button.like_count()
    }

    #[wasm_bindgen(getter, js_name = iconClass)]
    pub fn icon_class(&self) -> String {
        self.button.icon().class_name().to_owned()
    }

    #[wasm_bindgen(getter, js_name = buttonClass)]
    pub fn button_class(&self) -> String {
        self.button.button_classes().to_owned()
    }

    /// Path of the like endpoint for this review
    #[wasm_bindgen(getter)]
    pub fn endpoint(&self) -> String {
        format!("/reviews/like/{}/", self.button.review_id)
    }
}

/// Newsletter form button; the page schedules `advance` after `delayMs`
#[wasm_bindgen]
pub struct NewsletterHandle {
    button: NewsletterButton,
}

#[wasm_bindgen]
impl NewsletterHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(label: &str) -> NewsletterHandle {
        Self {
            button: NewsletterButton::new(label),
        }
    }

    /// Returns the delay in milliseconds before `advance`, if the form was idle
    pub fn submit(&mut self) -> Option<u32> {
        self.button.submit().map(as_millis)
    }

    pub fn advance(&mut self) -> Option<u32> {
        self.button.advance().map(as_millis)
    }

    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.button.label().to_owned()
    }

    #[wasm_bindgen(getter)]
    pub fn disabled(&self) -> bool {
        self.button.is_disabled()
    }

    #[wasm_bindgen(getter, js_name = colorClass)]
    pub fn color_class(&self) -> String {
        self.button.color_class().to_owned()
    }
}

fn as_millis(delay: std::time::Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
