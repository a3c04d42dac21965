use crate::config::Config;
use crate::encoder::interface::Encoder;
use crate::image_source::interface::ImageSource;
use crate::label_client::interface::LabelClient;
use crate::library::logger::interface::Logger;
use crate::session::core::{init, transition, Effect, Event, Model};
use crate::session::run_effect::{RunEffect, Waker};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

/// Owns the one model of the screen. Only `dispatch` and `pump` mutate it, and
/// both run on the thread that owns the session.
pub struct Session {
    model: Model,
    logger: Arc<dyn Logger + Send + Sync>,
    event_receiver: Receiver<Event>,
    run_effect: RunEffect,
}

impl Session {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_source: Arc<dyn ImageSource + Send + Sync>,
        encoder: Arc<dyn Encoder + Send + Sync>,
        label_client: Arc<dyn LabelClient + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let logger = logger.with_namespace("session");
        let run_effect = RunEffect::new(
            config,
            logger.clone(),
            image_source,
            encoder,
            label_client,
            event_sender,
        );

        let (model, effects) = init();

        let session = Self {
            model,
            logger,
            event_receiver,
            run_effect,
        };
        session.spawn_effects(effects);
        session
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn set_waker(&self, waker: Waker) {
        self.run_effect.set_waker(waker);
    }

    pub fn dispatch(&mut self, event: Event) {
        let _ = self.logger.info(&format!(
            "\nold model:\n\t{:?}\n\nevent:\n\t{:?}",
            self.model, event,
        ));

        let (new_model, effects) = transition(std::mem::take(&mut self.model), event);

        let _ = self.logger.info(&format!(
            "\nnew model:\n\t{:?}\n\neffects:\n\t{:?}",
            new_model, effects
        ));

        self.model = new_model;
        self.spawn_effects(effects);
    }

    /// Applies every event workers have reported so far. Returns how many.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dispatch(event);
            applied += 1;
        }
        applied
    }

    /// Blocks until one worker event arrives and applies it.
    #[cfg(test)]
    pub fn pump_blocking(&mut self, timeout: std::time::Duration) -> bool {
        match self.event_receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.dispatch(event);
                true
            }
            Err(_) => false,
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }
}
