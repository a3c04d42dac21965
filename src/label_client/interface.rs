use crate::encoder::interface::Base64Payload;
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDescriptor {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    #[serde(rename = "mid", default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topicality: Option<f32>,
}

impl LabelDescriptor {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            score: None,
            topic_id: None,
            topicality: None,
        }
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }
}

pub trait LabelClient {
    /// Labels in the API's own ranking, at most the configured maximum.
    fn analyze(&self, payload: &Base64Payload) -> Result<Vec<LabelDescriptor>, AnalysisError>;
}
