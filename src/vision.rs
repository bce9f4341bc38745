//! JSON boundary for text-detection responses and for the reduced line list handed on to the
//! extraction model.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{ExtractedLine, TextAnnotation};

/// The part of an image annotation response this crate consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    #[serde(default)]
    pub text_annotations: Option<Vec<TextAnnotation>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Annotations(Vec<TextAnnotation>),
    Response(AnnotateImageResponse),
}

/// Reads either a full response object or a bare annotation array. A response without
/// `textAnnotations` yields no annotations.
#[instrument(level = "debug", skip(json))]
pub fn parse_annotations(json: &str) -> serde_json::Result<Vec<TextAnnotation>> {
    let annotations = match serde_json::from_str(json)? {
        Payload::Annotations(annotations) => annotations,
        Payload::Response(response) => response.text_annotations.unwrap_or_default(),
    };
    log::debug!("Parsed {} text annotations.", annotations.len());
    Ok(annotations)
}

pub fn extracted_list(annotations: &[TextAnnotation]) -> Vec<ExtractedLine> {
    annotations.iter().map(ExtractedLine::from).collect()
}

pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{BoundingPoly, Point, Vertex};

    #[test]
    fn parses_response_object() {
        let json = json!({
            "textAnnotations": [
                {
                    "description": "Soup\n",
                    "locale": "en",
                    "boundingPoly": { "vertices": [{ "x": 1, "y": 2 }, { "x": 30 }] }
                },
                {
                    "description": "Soup",
                    "mid": "ignored",
                    "boundingPoly": { "vertices": [{ "y": 2 }, { "x": 30, "y": null }] }
                }
            ],
            "fullTextAnnotation": {}
        })
        .to_string();

        let annotations = parse_annotations(&json).unwrap();
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[0].locale.as_deref(), Some("en"));
        assert_eq!(
            annotations[1].bounding_poly.vertices,
            vec![
                Vertex { x: None, y: Some(2.0) },
                Vertex { x: Some(30.0), y: None },
            ]
        );
        assert!(annotations[1].locale.is_none());
    }

    #[test]
    fn parses_bare_array() {
        let json = json!([{ "description": "a", "boundingPoly": { "vertices": [] } }]).to_string();
        let annotations = parse_annotations(&json).unwrap();
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].description, "a");
    }

    #[test]
    fn missing_or_null_annotations_are_empty() {
        assert!(parse_annotations("{}").unwrap().is_empty());
        assert!(parse_annotations(r#"{"textAnnotations": null}"#).unwrap().is_empty());
        assert!(parse_annotations("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_annotations("{\"textAnnotations\": [").is_err());
        assert!(parse_annotations("42").is_err());
    }

    #[test]
    fn serializes_camel_case_and_skips_missing_coordinates() {
        let annotation = TextAnnotation::new(
            "x",
            BoundingPoly::new([Vertex { x: Some(4.0), y: None }]),
        );
        let value: serde_json::Value =
            serde_json::from_str(&to_json(&annotation, false).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "description": "x",
                "boundingPoly": { "vertices": [{ "x": 4.0 }], "normalizedVertices": [] }
            })
        );
    }

    #[test]
    fn extracted_list_fills_missing_coordinates() {
        let annotation = TextAnnotation::new(
            "Tea",
            BoundingPoly::new([Vertex { x: None, y: Some(5.0) }, Vertex::new(9.0, 5.0)]),
        );
        let list = extracted_list(&[annotation]);
        assert_eq!(
            list,
            vec![ExtractedLine {
                text: "Tea".to_owned(),
                bounding_box: vec![Point { x: 0.0, y: 5.0 }, Point { x: 9.0, y: 5.0 }],
            }]
        );
        let value: serde_json::Value =
            serde_json::from_str(&to_json(&list, true).unwrap()).unwrap();
        assert_eq!(
            value,
            json!([{ "text": "Tea", "boundingBox": [{ "x": 0.0, "y": 5.0 }, { "x": 9.0, "y": 5.0 }] }])
        );
    }
}
