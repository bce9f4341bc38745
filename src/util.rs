use geo::{BoundingRect, Coord, LineString, Rect};

use crate::{BoundingPoly, Orientation, TextAnnotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn of(self, coord: Coord<f64>) -> f64 {
        match self {
            Axis::X => coord.x,
            Axis::Y => coord.y,
        }
    }
}

impl Orientation {
    /// Axis along which words of one line are spread out (reading direction).
    pub fn reading_axis(self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::X,
            Orientation::Vertical => Axis::Y,
        }
    }

    /// Axis separating consecutive lines.
    pub fn line_axis(self) -> Axis {
        match self {
            Orientation::Horizontal => Axis::Y,
            Orientation::Vertical => Axis::X,
        }
    }
}

pub(crate) fn coords(poly: &BoundingPoly) -> impl Iterator<Item = Coord<f64>> + '_ {
    poly.vertices.iter().map(|vertex| vertex.coord())
}

/// Mean of all vertices. A polygon without vertices sits at the origin.
pub fn center(poly: &BoundingPoly) -> Coord<f64> {
    if poly.vertices.is_empty() {
        return Coord { x: 0.0, y: 0.0 };
    }
    let len = poly.vertices.len() as f64;
    let sum = coords(poly).fold(Coord { x: 0.0, y: 0.0 }, |acc, coord| acc + coord);
    Coord {
        x: sum.x / len,
        y: sum.y / len,
    }
}

pub fn bounds(poly: &BoundingPoly) -> Option<Rect<f64>> {
    LineString::new(coords(poly).collect()).bounding_rect()
}

/// `(width, height)` of the polygon's bounding rectangle.
pub fn extent(poly: &BoundingPoly) -> (f64, f64) {
    bounds(poly)
        .map(|rect| (rect.width(), rect.height()))
        .unwrap_or_default()
}

pub fn extent_along(poly: &BoundingPoly, axis: Axis) -> f64 {
    let (width, height) = extent(poly);
    match axis {
        Axis::X => width,
        Axis::Y => height,
    }
}

/// Global glyph size estimate used to derive the line threshold. Mixed font sizes in one image
/// are not accounted for.
pub fn average_dimension<'a>(
    annotations: impl IntoIterator<Item = &'a TextAnnotation>,
    axis: Axis,
) -> f64 {
    let (sum, count) = annotations
        .into_iter()
        .fold((0.0f64, 0usize), |(sum, count), annotation| {
            (sum + extent_along(&annotation.bounding_poly, axis), count + 1)
        });
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
