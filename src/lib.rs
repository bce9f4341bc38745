use tracing::instrument;

pub mod grouping;
pub mod merge;
pub mod orientation;
mod result;
pub mod util;
pub mod vision;

pub use grouping::{group_horizontal, group_into_lines, group_vertical};
pub use merge::{merge_line, merge_lines};
pub use orientation::detect_orientation;
pub use result::*;
pub use vision::{extracted_list, parse_annotations, AnnotateImageResponse};

pub use geo;

#[derive(Debug, Clone, Copy)]
pub struct MergeOptions {
    /// Multiplier on the average word extent across lines; centers closer than this join a line.
    pub line_threshold_ratio: f64,
    /// Drop the first annotation, which text detection reserves for the whole-image text block.
    pub skip_aggregate: bool,
    pub default_locale: &'static str,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            line_threshold_ratio: grouping::DEFAULT_LINE_THRESHOLD_RATIO,
            skip_aggregate: true,
            default_locale: merge::DEFAULT_LOCALE,
        }
    }
}

/// Rebuilds text lines from word-level detections, returning one annotation per line.
///
/// Inputs with fewer than two annotations are returned unchanged. Otherwise the first annotation
/// is treated as the whole-image aggregate and dropped, and only merged lines are returned.
pub fn merge_text_lines(annotations: &[TextAnnotation]) -> Vec<TextAnnotation> {
    merge_text_lines_with(annotations, MergeOptions::default())
}

#[instrument(level = "debug", skip(annotations), fields(count = annotations.len()))]
pub fn merge_text_lines_with(
    annotations: &[TextAnnotation],
    options: MergeOptions,
) -> Vec<TextAnnotation> {
    if annotations.len() <= 1 {
        return annotations.to_vec();
    }

    let words = if options.skip_aggregate {
        &annotations[1..]
    } else {
        annotations
    };

    let lines = match detect_orientation(words) {
        Orientation::Horizontal => group_horizontal(words, options.line_threshold_ratio),
        Orientation::Vertical => group_vertical(words, options.line_threshold_ratio),
    };
    merge_lines(&lines, options.default_locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> TextAnnotation {
        TextAnnotation::new(text, BoundingPoly::from_bounds(min_x, min_y, max_x, max_y))
    }

    #[test]
    fn trivial_inputs_pass_through() {
        assert!(merge_text_lines(&[]).is_empty());

        let single = [word("whole page", 0.0, 0.0, 500.0, 500.0).with_locale("de")];
        assert_eq!(merge_text_lines(&single), single.to_vec());
    }

    #[test]
    fn first_annotation_is_dropped() {
        let annotations = [
            word("Tea Coffee", 0.0, 0.0, 200.0, 40.0),
            word("Tea", 0.0, 0.0, 60.0, 30.0),
        ];
        let merged = merge_text_lines(&annotations);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].description, "Tea");
        assert_eq!(merged[0].locale.as_deref(), Some("en"));
    }

    #[test]
    fn keeping_aggregate_merges_every_annotation() {
        let annotations = [
            word("Tea", 0.0, 0.0, 60.0, 30.0),
            word("Coffee", 70.0, 0.0, 160.0, 30.0),
        ];
        let options = MergeOptions {
            skip_aggregate: false,
            ..Default::default()
        };
        let merged = merge_text_lines_with(&annotations, options);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].description, "Tea Coffee");
    }

    #[test]
    fn default_options() {
        let options = MergeOptions::default();
        assert_eq!(options.line_threshold_ratio, 0.6);
        assert!(options.skip_aggregate);
        assert_eq!(options.default_locale, "en");
    }
}
