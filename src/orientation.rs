use tracing::instrument;

use crate::{util::extent, Orientation, TextAnnotation};

/// Classifies the dominant text flow by comparing how many detections are wider than tall.
/// Square detections count as vertical.
#[instrument(level = "debug", skip(annotations), fields(count = annotations.len()))]
pub fn detect_orientation(annotations: &[TextAnnotation]) -> Orientation {
    let horizontal = annotations
        .iter()
        .filter(|annotation| {
            let (width, height) = extent(&annotation.bounding_poly);
            width > height
        })
        .count();
    let vertical = annotations.len() - horizontal;

    let orientation = if horizontal > vertical {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    log::debug!("Detected {orientation} text flow ({horizontal} horizontal, {vertical} vertical).");
    orientation
}
