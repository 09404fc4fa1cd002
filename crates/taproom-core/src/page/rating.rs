//! Star rendering for review ratings

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Stars shown per rating widget
pub const STAR_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    pub fn class_name(&self) -> &'static str {
        match self {
            Star::Full => "bi bi-star-fill",
            Star::Half => "bi bi-star-half",
            Star::Empty => "bi bi-star",
        }
    }
}

/// Star for position `index` (0-based) of a rating
pub fn star_at(rating: f64, index: usize) -> Star {
    let position = index as f64;
    if position < rating.floor() {
        Star::Full
    } else if position < rating {
        Star::Half
    } else {
        Star::Empty
    }
}

/// Stars for a rating across `count` positions
pub fn render_stars(rating: f64, count: usize) -> Vec<Star> {
    (0..count).map(|index| star_at(rating, index)).collect()
}

static LEADING_NUMBER: OnceLock<Regex> = OnceLock::new();

fn leading_number_regex() -> &'static Regex {
    LEADING_NUMBER.get_or_init(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap()
    })
}

/// Read the number an attribute starts with, ignoring trailing text
///
/// `"4.5 stars"` reads as 4.5; text without a leading number reads as `None`.
pub fn parse_leading_number(attribute: &str) -> Option<f64> {
    let matched = leading_number_regex().find(attribute.trim_start())?.as_str();
    match matched.trim_start_matches(&['+', '-'][..]) {
        "Infinity" if matched.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => matched.parse().ok(),
    }
}

/// Stars for a `data-rating` attribute; values without a leading number render empty
pub fn render_rating_attribute(attribute: &str, count: usize) -> Vec<Star> {
    let rating = parse_leading_number(attribute).unwrap_or(0.0);
    render_stars(rating, count)
}
