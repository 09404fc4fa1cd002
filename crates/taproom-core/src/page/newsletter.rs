//! Newsletter signup button
//!
//! The signup form has no endpoint yet: submitting shows "Subscribing..."
//! for a second, then "Subscribed!" for three more before the button resets.
//! The host drives the transitions with its own timers using the delays here.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Time spent in the subscribing state
pub const SUBSCRIBE_DELAY: Duration = Duration::from_secs(1);

/// Time the confirmation stays visible before the button resets
pub const RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NewsletterState {
    #[default]
    Idle,
    Subscribing,
    Subscribed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterButton {
    idle_label: String,
    state: NewsletterState,
}

impl NewsletterButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            idle_label: label.into(),
            state: NewsletterState::Idle,
        }
    }

    pub fn state(&self) -> NewsletterState {
        self.state
    }

    pub fn label(&self) -> &str {
        match self.state {
            NewsletterState::Idle => &self.idle_label,
            NewsletterState::Subscribing => "Subscribing...",
            NewsletterState::Subscribed => "Subscribed!",
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.state != NewsletterState::Idle
    }

    /// Button colour class
    pub fn color_class(&self) -> &'static str {
        match self.state {
            NewsletterState::Subscribed => "btn-success",
            NewsletterState::Idle | NewsletterState::Subscribing => "btn-warning",
        }
    }

    /// Form submitted; returns the delay before [`Self::advance`] should run,
    /// or `None` if the button was not idle
    pub fn submit(&mut self) -> Option<Duration> {
        if self.state != NewsletterState::Idle {
            return None;
        }
        self.state = NewsletterState::Subscribing;
        Some(SUBSCRIBE_DELAY)
    }

    /// Move to the next state; returns the delay before the following step
    pub fn advance(&mut self) -> Option<Duration> {
        match self.state {
            NewsletterState::Idle => None,
            NewsletterState::Subscribing => {
                self.state = NewsletterState::Subscribed;
                Some(RESET_DELAY)
            }
            NewsletterState::Subscribed => {
                self.state = NewsletterState::Idle;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut button = NewsletterButton::new("Subscribe");
        assert_eq!(button.label(), "Subscribe");
        assert!(!button.is_disabled());

        assert_eq!(button.submit(), Some(SUBSCRIBE_DELAY));
        assert_eq!(button.label(), "Subscribing...");
        assert!(button.is_disabled());
        assert_eq!(button.submit(), None);

        assert_eq!(button.advance(), Some(RESET_DELAY));
        assert_eq!(button.label(), "Subscribed!");
        assert_eq!(button.color_class(), "btn-success");

        assert_eq!(button.advance(), None);
        assert_eq!(button.state(), NewsletterState::Idle);
        assert_eq!(button.label(), "Subscribe");
        assert_eq!(button.color_class(), "btn-warning");
    }
}
