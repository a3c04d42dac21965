//! JSON bodies of the `images:annotate` endpoint.

use crate::error::AnalysisError;
use crate::label_client::interface::LabelDescriptor;
use serde::{Deserialize, Serialize};

pub const LABEL_DETECTION: &str = "LABEL_DETECTION";

#[derive(Debug, Serialize)]
pub struct AnnotateRequest<'a> {
    pub requests: Vec<AnnotateImageRequest<'a>>,
}

#[derive(Debug, Serialize)]
pub struct AnnotateImageRequest<'a> {
    pub image: ImageContent<'a>,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct ImageContent<'a> {
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(rename = "maxResults")]
    pub max_results: u32,
}

impl<'a> AnnotateRequest<'a> {
    pub fn label_detection(content: &'a str, max_results: u32) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: ImageContent { content },
                features: vec![Feature {
                    kind: LABEL_DETECTION,
                    max_results,
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnnotateResponse {
    pub responses: Option<Vec<AnnotateImageResponse>>,
}

#[derive(Debug, Deserialize)]
pub struct AnnotateImageResponse {
    #[serde(rename = "labelAnnotations")]
    pub label_annotations: Option<Vec<LabelDescriptor>>,
    pub error: Option<ApiStatus>,
}

#[derive(Debug, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// A response entry without `labelAnnotations` means nothing was found; the
/// API omits empty fields. Anything else off-shape is an error.
pub fn parse_labels(body: &str, max_results: u32) -> Result<Vec<LabelDescriptor>, AnalysisError> {
    let response: AnnotateResponse = serde_json::from_str(body)
        .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

    let mut responses = response
        .responses
        .ok_or_else(|| AnalysisError::MalformedResponse("missing `responses`".to_string()))?;

    if responses.len() != 1 {
        return Err(AnalysisError::MalformedResponse(format!(
            "expected 1 entry in `responses`, got {}",
            responses.len()
        )));
    }

    let entry = responses.remove(0);

    if let Some(status) = entry.error {
        return Err(AnalysisError::Api {
            code: status.code,
            message: status.message,
        });
    }

    let mut labels = entry.label_annotations.unwrap_or_default();
    labels.truncate(max_results as usize);

    Ok(labels)
}
