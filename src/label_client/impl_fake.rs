use crate::encoder::interface::Base64Payload;
use crate::error::AnalysisError;
use crate::label_client::interface::{LabelClient, LabelDescriptor};
use crate::library::logger::interface::Logger;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// Random labels for exercising the session without a network.
pub struct LabelClientFake {
    logger: Arc<dyn Logger + Send + Sync>,
    max_results: u32,
}

impl LabelClientFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, max_results: u32) -> Self {
        Self {
            logger: logger.with_namespace("label_client").with_namespace("fake"),
            max_results,
        }
    }
}

impl LabelClient for LabelClientFake {
    fn analyze(&self, payload: &Base64Payload) -> Result<Vec<LabelDescriptor>, AnalysisError> {
        let _ = self.logger.info(&format!(
            "Labeling {} base64 bytes with fake client...",
            payload.len()
        ));

        let mut objects = vec![
            "dog", "cat", "person", "car", "chair", "table", "bird", "tree", "bicycle", "book",
            "laptop", "phone", "cup", "bottle", "keyboard", "mouse", "plant", "clock",
        ];

        let mut rng = rand::rng();
        objects.shuffle(&mut rng);

        let count = rng.random_range(1..=self.max_results.max(1)) as usize;

        let mut labels: Vec<LabelDescriptor> = objects
            .into_iter()
            .take(count)
            .map(|object| LabelDescriptor::new(object).with_score(rng.random_range(0.5f32..1.0)))
            .collect();

        labels.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        Ok(labels)
    }
}

#[cfg(test)]
mod impl_fake_test {
    use super::*;
    use crate::library::logger::impl_fake::LoggerFake;

    #[test]
    fn test_fake_respects_max_results() {
        let client = LabelClientFake::new(Arc::new(LoggerFake::new()), 5);

        for _ in 0..20 {
            let labels = client
                .analyze(&Base64Payload::new("AAAA".to_string()))
                .unwrap();
            assert!(!labels.is_empty());
            assert!(labels.len() <= 5);
            assert!(labels
                .iter()
                .all(|l| l.score.is_some_and(|s| (0.5..1.0).contains(&s))));
        }
    }
}
