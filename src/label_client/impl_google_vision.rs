use crate::config::Config;
use crate::encoder::interface::Base64Payload;
use crate::error::AnalysisError;
use crate::label_client::interface::{LabelClient, LabelDescriptor};
use crate::label_client::wire::{parse_labels, AnnotateRequest};
use crate::library::logger::interface::Logger;
use reqwest::blocking::Client;
use std::sync::Arc;

/// Google Cloud Vision `images:annotate`, one best-effort POST per call.
pub struct LabelClientGoogleVision {
    logger: Arc<dyn Logger + Send + Sync>,
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    max_results: u32,
}

impl LabelClientGoogleVision {
    pub fn new(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self::with_client(Client::new(), config, logger)
    }

    pub fn with_client(
        client: Client,
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            logger: logger
                .with_namespace("label_client")
                .with_namespace("google_vision"),
            client,
            endpoint: config.vision_endpoint.clone(),
            api_key: config.vision_api_key.clone(),
            max_results: config.max_results,
        }
    }
}

impl LabelClient for LabelClientGoogleVision {
    fn analyze(&self, payload: &Base64Payload) -> Result<Vec<LabelDescriptor>, AnalysisError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AnalysisError::MissingCredential)?;

        let request = AnnotateRequest::label_detection(payload.as_str(), self.max_results);

        let _ = self.logger.info(&format!(
            "POST {} ({} base64 bytes, maxResults {})",
            self.endpoint,
            payload.len(),
            self.max_results
        ));

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&request)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let labels = parse_labels(&body, self.max_results)?;

        let _ = self.logger.info(&format!(
            "Received {} labels: {:?}",
            labels.len(),
            labels
                .iter()
                .map(|l| l.description.as_str())
                .collect::<Vec<_>>()
        ));

        Ok(labels)
    }
}
