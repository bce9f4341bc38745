use geo::{BoundingRect, Coord, LineString, Rect};
use tracing::instrument;

use crate::{util::coords, BoundingPoly, Line, TextAnnotation};

pub const DEFAULT_LOCALE: &str = "en";

/// Collapses a line into a single annotation: member texts joined with single spaces and an
/// axis-aligned rectangle enclosing every member vertex. Rotation of the members is discarded.
#[instrument(level = "trace", skip(line), fields(count = line.len()))]
pub fn merge_line(line: &[&TextAnnotation], default_locale: &str) -> TextAnnotation {
    let description = line
        .iter()
        .map(|annotation| annotation.description.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let rect = LineString::new(
        line.iter()
            .flat_map(|&annotation| coords(&annotation.bounding_poly))
            .collect(),
    )
    .bounding_rect()
    .unwrap_or_else(|| Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 0.0, y: 0.0 }));

    let locale = line
        .first()
        .and_then(|annotation| annotation.locale.clone())
        .unwrap_or_else(|| default_locale.to_owned());

    log::trace!("Merged line {description:?} into {rect:?}");
    TextAnnotation {
        description,
        bounding_poly: BoundingPoly::rectangle(rect),
        locale: Some(locale),
    }
}

#[instrument(level = "debug", skip(lines), fields(count = lines.len()))]
pub fn merge_lines(lines: &[Line<'_>], default_locale: &str) -> Vec<TextAnnotation> {
    lines
        .iter()
        .map(|line| merge_line(line, default_locale))
        .collect()
}
