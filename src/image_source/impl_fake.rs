use crate::error::PickError;
use crate::image_source::interface::{ImageSource, PickOptions, PickResult};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays scripted picker outcomes in order; cancels once the script runs out.
pub struct ImageSourceFake {
    outcomes: Mutex<VecDeque<Result<PickResult, PickError>>>,
    requests: Mutex<Vec<PickOptions>>,
}

impl ImageSourceFake {
    pub fn new(outcomes: Vec<Result<PickResult, PickError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn push(&self, outcome: Result<PickResult, PickError>) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push_back(outcome);
        }
    }

    pub fn requests(&self) -> Vec<PickOptions> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl ImageSource for ImageSourceFake {
    fn pick_image(&self, options: &PickOptions) -> Result<PickResult, PickError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(options.clone());
        }

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(PickResult::cancelled()))
    }
}
