//! Page enhancements around the review pages
//!
//! State and markup rules for the widgets the page script wires up next to
//! the forms: the like button, share links, toasts, rating stars, the
//! newsletter stub and search hints. None of these touch the validators.

pub mod cookie;
pub mod like;
pub mod newsletter;
pub mod rating;
pub mod share;
pub mod toast;

use std::time::Duration;

pub use cookie::{csrf_token, get_cookie, CSRF_COOKIE_NAME, CSRF_HEADER_NAME};
pub use like::{LikeButton, LikeIcon, LikeResponse};
pub use newsletter::{NewsletterButton, NewsletterState};
pub use rating::{parse_leading_number, render_rating_attribute, render_stars, Star, STAR_COUNT};
pub use share::{clipboard_toast, facebook_share_url, share_url, twitter_share_url, ShareTarget};
pub use toast::{Toast, ToastKind, TOAST_CONTAINER_CLASSES, TOAST_CONTAINER_Z_INDEX};

/// Delay before flash alerts close themselves
pub const ALERT_DISMISS_DELAY: Duration = Duration::from_secs(5);

/// Minimum trimmed query length before search suggestions are worth fetching
pub const SEARCH_SUGGESTION_MIN_LEN: usize = 3;

/// The trimmed query, if it is long enough to look up suggestions for
pub fn search_suggestion_query(input: &str) -> Option<&str> {
    let query = input.trim();
    (query.chars().count() >= SEARCH_SUGGESTION_MIN_LEN).then_some(query)
}
