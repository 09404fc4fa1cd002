//! Like button state
//!
//! The button shows a loading icon while the like request is in flight,
//! takes `liked` and the count from the server's reply, and falls back to
//! the icon it had before the click when the request fails.

use serde::{Deserialize, Serialize};

/// Body returned by the like endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub like_count: u64,
}

/// Icon rendered inside the like button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LikeIcon {
    Heart,
    HeartFill,
    Loading,
}

impl LikeIcon {
    pub fn class_name(&self) -> &'static str {
        match self {
            LikeIcon::Heart => "bi bi-heart",
            LikeIcon::HeartFill => "bi bi-heart-fill",
            LikeIcon::Loading => "bi bi-heart loading",
        }
    }

    fn for_liked(liked: bool) -> Self {
        if liked {
            LikeIcon::HeartFill
        } else {
            LikeIcon::Heart
        }
    }
}

/// A like button attached to one review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeButton {
    pub review_id: u64,
    liked: bool,
    /// `None` when the button renders no count element
    like_count: Option<u64>,
    icon: LikeIcon,
    /// Icon to restore if the in-flight request fails
    previous_icon: Option<LikeIcon>,
}

impl LikeButton {
    pub fn new(review_id: u64, liked: bool, like_count: Option<u64>) -> Self {
        Self {
            review_id,
            liked,
            like_count,
            icon: LikeIcon::for_liked(liked),
            previous_icon: None,
        }
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    pub fn like_count(&self) -> Option<u64> {
        self.like_count
    }

    pub fn icon(&self) -> LikeIcon {
        self.icon
    }

    pub fn is_pending(&self) -> bool {
        self.previous_icon.is_some()
    }

    /// Class list of the button element
    pub fn button_classes(&self) -> &'static str {
        if self.liked {
            "like-btn liked"
        } else {
            "like-btn"
        }
    }

    /// Switch to the loading icon for a click
    ///
    /// A second click while a request is in flight keeps the icon from before
    /// the first click as the one to restore.
    pub fn begin(&mut self) {
        if self.previous_icon.is_none() {
            self.previous_icon = Some(self.icon);
        }
        self.icon = LikeIcon::Loading;
    }

    /// Apply the server's reply
    pub fn apply(&mut self, response: LikeResponse) {
        self.liked = response.liked;
        self.icon = LikeIcon::for_liked(response.liked);
        if self.like_count.is_some() {
            self.like_count = Some(response.like_count);
        }
        self.previous_icon = None;
    }

    /// Restore the icon from before the click after a failed request
    pub fn revert(&mut self) {
        if let Some(icon) = self.previous_icon.take() {
            self.icon = icon;
        }
    }
}
