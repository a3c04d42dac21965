use crate::image_source::interface::{MediaType, PickOptions};
use chrono::Offset;

pub const DEFAULT_VISION_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";
pub const ENV_VISION_API_KEY: &str = "VISION_API_KEY";
pub const ENV_VISION_ENDPOINT: &str = "VISION_ENDPOINT";

#[derive(Debug, Clone)]
pub struct Config {
    pub logger_timezone: chrono::FixedOffset,
    pub vision_endpoint: String,
    /// Injected at runtime, never compiled in.
    pub vision_api_key: Option<String>,
    pub max_results: u32,
    pub pick_options: PickOptions,
    pub window_size: [f32; 2],
    pub preview_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logger_timezone: mountain_standard_time(),
            vision_endpoint: DEFAULT_VISION_ENDPOINT.to_string(),
            vision_api_key: None,
            max_results: 5,
            pick_options: PickOptions {
                media: MediaType::Images,
                allows_editing: true,
                aspect: (4, 3),
                quality: 1.0,
            },
            window_size: [420.0, 640.0],
            preview_size: 300.0,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(ENV_VISION_API_KEY).ok(),
            std::env::var(ENV_VISION_ENDPOINT).ok(),
        )
    }

    fn with_overrides(mut self, api_key: Option<String>, endpoint: Option<String>) -> Self {
        self.vision_api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.vision_endpoint = endpoint.trim().to_string();
        }

        self
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap_or(chrono::Utc.fix())
}
