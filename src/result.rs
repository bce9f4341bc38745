use std::fmt;

use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};

/// A polygon corner as reported by the OCR engine. The engine omits coordinates that are zero, so
/// both fields are optional and read through [`Vertex::x`] / [`Vertex::y`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn x(&self) -> f32 {
        self.x.unwrap_or(0.0)
    }

    pub fn y(&self) -> f32 {
        self.y.unwrap_or(0.0)
    }

    /// Widened to `f64` for geometry.
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: f64::from(self.x()),
            y: f64::from(self.y()),
        }
    }
}

impl From<Coord<f64>> for Vertex {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.x as f32, coord.y as f32)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingPoly {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub normalized_vertices: Vec<Vertex>,
}

impl BoundingPoly {
    pub fn new(vertices: impl IntoIterator<Item = Vertex>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
            normalized_vertices: Vec::new(),
        }
    }

    /// Axis-aligned rectangle in clockwise order starting at the top-left corner.
    pub fn rectangle(rect: Rect<f64>) -> Self {
        let min = rect.min();
        let max = rect.max();
        Self::new([
            Vertex::from(min),
            Vertex::from(Coord { x: max.x, y: min.y }),
            Vertex::from(max),
            Vertex::from(Coord { x: min.x, y: max.y }),
        ])
    }

    pub fn from_bounds(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self::new([
            Vertex::new(min_x, min_y),
            Vertex::new(max_x, min_y),
            Vertex::new(max_x, max_y),
            Vertex::new(min_x, max_y),
        ])
    }
}

/// A single OCR detection: either the whole-image aggregate block or one word. Merged lines use
/// the same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnnotation {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bounding_poly: BoundingPoly,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl TextAnnotation {
    pub fn new(description: impl Into<String>, bounding_poly: BoundingPoly) -> Self {
        Self {
            description: description.into(),
            bounding_poly,
            locale: None,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// Ordered words belonging to one visual row (or column).
pub type Line<'a> = Vec<&'a TextAnnotation>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Reduced form of a merged line handed to the downstream extraction model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedLine {
    pub text: String,
    pub bounding_box: Vec<Point>,
}

impl From<&TextAnnotation> for ExtractedLine {
    fn from(annotation: &TextAnnotation) -> Self {
        Self {
            text: annotation.description.clone(),
            bounding_box: annotation
                .bounding_poly
                .vertices
                .iter()
                .map(|vertex| Point {
                    x: vertex.x(),
                    y: vertex.y(),
                })
                .collect(),
        }
    }
}
