use crate::config::Config;
use crate::encoder::interface::Encoder;
use crate::error::AnalysisError;
use crate::image_source::interface::{ImageReference, ImageSource};
use crate::label_client::interface::{LabelClient, LabelDescriptor};
use crate::library::logger::interface::Logger;
use crate::session::core::{Effect, Event};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

pub type Waker = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    image_source: Arc<dyn ImageSource + Send + Sync>,
    encoder: Arc<dyn Encoder + Send + Sync>,
    label_client: Arc<dyn LabelClient + Send + Sync>,
    event_sender: Sender<Event>,
    waker: Arc<Mutex<Option<Waker>>>,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_source: Arc<dyn ImageSource + Send + Sync>,
        encoder: Arc<dyn Encoder + Send + Sync>,
        label_client: Arc<dyn LabelClient + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("effect"),
            image_source,
            encoder,
            label_client,
            event_sender,
            waker: Arc::new(Mutex::new(None)),
        }
    }

    /// Called after every event a worker sends, so the UI can repaint.
    pub fn set_waker(&self, waker: Waker) {
        if let Ok(mut slot) = self.waker.lock() {
            *slot = Some(waker);
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::PickImage => {
                let picked = self.image_source.pick_image(&self.config.pick_options);
                if let Err(e) = &picked {
                    let _ = self.logger.error(&format!("Error picking image: {}", e));
                }
                self.send(Event::PickDone(picked));
            }
            Effect::AnalyzeImage { generation, image } => {
                let result = self.analyze(&image);
                if let Err(e) = &result {
                    let _ = self.logger.error(&format!("Error analyzing image: {}", e));
                }
                self.send(Event::AnalyzeDone { generation, result });
            }
        }
    }

    fn analyze(&self, image: &ImageReference) -> Result<Vec<LabelDescriptor>, AnalysisError> {
        let payload = self.encoder.encode(image)?;
        self.label_client.analyze(&payload)
    }

    fn send(&self, event: Event) {
        if self.event_sender.send(event).is_err() {
            let _ = self.logger.error("Session closed, dropping event");
            return;
        }

        if let Ok(waker) = self.waker.lock() {
            if let Some(wake) = waker.as_ref() {
                wake();
            }
        }
    }
}
