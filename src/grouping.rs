use float_ord::FloatOrd;
use geo::Coord;
use tracing::instrument;

use crate::{
    util::{average_dimension, center, Axis},
    Line, Orientation, TextAnnotation,
};

/// Fraction of the average glyph size below which two centers are considered the same line.
pub const DEFAULT_LINE_THRESHOLD_RATIO: f64 = 0.6;

/// Rows of words, top to bottom, each ordered left to right.
pub fn group_horizontal(annotations: &[TextAnnotation], threshold_ratio: f64) -> Vec<Line<'_>> {
    group_into_lines(annotations, Orientation::Horizontal, threshold_ratio)
}

/// Columns of words, left to right, each ordered top to bottom.
pub fn group_vertical(annotations: &[TextAnnotation], threshold_ratio: f64) -> Vec<Line<'_>> {
    group_into_lines(annotations, Orientation::Vertical, threshold_ratio)
}

/// Partitions words into lines along `orientation`.
///
/// Words are swept in order of their center on the line axis. A word joins the line being built
/// while its center is closer than the threshold to the mean center of every word already in that
/// line; otherwise the line is closed and the word starts a new one. The threshold is
/// `threshold_ratio` times the average word extent on the line axis, computed once over the whole
/// set. Comparing against the running mean rather than the last word tolerates a slowly drifting
/// baseline, and lets very long lines drift as well.
#[instrument(level = "debug", skip(annotations), fields(count = annotations.len()))]
pub fn group_into_lines(
    annotations: &[TextAnnotation],
    orientation: Orientation,
    threshold_ratio: f64,
) -> Vec<Line<'_>> {
    let line_axis = orientation.line_axis();
    let reading_axis = orientation.reading_axis();

    let mut sorted = annotations
        .iter()
        .map(|annotation| (center(&annotation.bounding_poly), annotation))
        .collect::<Vec<_>>();
    sorted.sort_by_key(|(center, _)| FloatOrd(line_axis.of(*center)));

    let threshold = average_dimension(annotations, line_axis) * threshold_ratio;
    log::debug!("Line threshold is {threshold} along {line_axis:?}.");

    let mut lines = Vec::new();
    let mut words = sorted.into_iter();
    let Some(first) = words.next() else {
        return lines;
    };

    let mut line_sum = line_axis.of(first.0);
    let mut current = vec![first];
    for word in words {
        let line_center = line_sum / current.len() as f64;
        let word_center = line_axis.of(word.0);
        if (word_center - line_center).abs() < threshold {
            line_sum += word_center;
            current.push(word);
        } else {
            lines.push(finish_line(current, reading_axis));
            line_sum = word_center;
            current = vec![word];
        }
    }
    lines.push(finish_line(current, reading_axis));

    log::debug!("Grouped {} words into {} lines.", annotations.len(), lines.len());
    lines
}

#[instrument(level = "trace", skip(words), fields(count = words.len()))]
fn finish_line(
    mut words: Vec<(Coord<f64>, &TextAnnotation)>,
    reading_axis: Axis,
) -> Line<'_> {
    words.sort_by_key(|(center, _)| FloatOrd(reading_axis.of(*center)));
    words.into_iter().map(|(_, annotation)| annotation).collect()
}
