//! Rating stars handler

use crate::cli::{OutputFormat, StarsArgs};
use crate::error::Result;
use crate::output::OutputWriter;
use taproom_core::page::{render_rating_attribute, Star};

fn glyph(star: Star) -> char {
    match star {
        Star::Full => '★',
        Star::Half => '⯪',
        Star::Empty => '☆',
    }
}

/// Handle the stars command
pub fn handle_stars(args: StarsArgs, output: &mut OutputWriter) -> Result<()> {
    let stars = render_rating_attribute(&args.rating, args.count);

    if output.format() == OutputFormat::Human {
        output.writeln(&stars.iter().copied().map(glyph).collect::<String>())
    } else {
        let classes: Vec<&str> = stars.iter().map(Star::class_name).collect();
        output.data(&serde_json::json!({
            "rating": args.rating,
            "stars": stars,
            "classes": classes,
        }))
    }
}
