use crate::error::{AnalysisError, PickError};
use crate::image_source::interface::{ImageReference, PickResult};
use crate::label_client::interface::LabelDescriptor;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum State {
    #[default]
    Idle,
    ImageSelected {
        image: ImageReference,
    },
    Analyzing {
        image: ImageReference,
        /// Labels on screen when the request went out, restored on failure.
        labels: Vec<LabelDescriptor>,
        generation: u64,
    },
    Results {
        image: ImageReference,
        labels: Vec<LabelDescriptor>,
    },
}

impl State {
    fn settled(image: ImageReference, labels: Vec<LabelDescriptor>) -> Self {
        if labels.is_empty() {
            State::ImageSelected { image }
        } else {
            State::Results { image, labels }
        }
    }

    pub fn image(&self) -> Option<&ImageReference> {
        match self {
            State::Idle => None,
            State::ImageSelected { image }
            | State::Analyzing { image, .. }
            | State::Results { image, .. } => Some(image),
        }
    }

    pub fn labels(&self) -> &[LabelDescriptor] {
        match self {
            State::Idle | State::ImageSelected { .. } => &[],
            State::Analyzing { labels, .. } | State::Results { labels, .. } => labels,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    NoImageSelected,
    AnalysisFailed,
    NoLabelsFound,
}

impl Alert {
    pub fn message(&self) -> &'static str {
        match self {
            Alert::NoImageSelected => "Please select an image first!",
            Alert::AnalysisFailed => "Error analyzing image. Please try again later.",
            Alert::NoLabelsFound => "No labels were found for this image.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub state: State,
    /// Bumped by every analyze request, successful pick and reset. An
    /// `AnalyzeDone` only lands if it carries the current value.
    pub generation: u64,
    pub picking: bool,
    pub alert: Option<Alert>,
}

#[derive(Debug)]
pub enum Event {
    PickRequested,
    PickDone(Result<PickResult, PickError>),
    AnalyzeRequested,
    AnalyzeDone {
        generation: u64,
        result: Result<Vec<LabelDescriptor>, AnalysisError>,
    },
    ResetRequested,
    AlertDismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PickImage,
    AnalyzeImage {
        generation: u64,
        image: ImageReference,
    },
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![])
}

pub fn transition(model: Model, event: Event) -> (Model, Vec<Effect>) {
    match event {
        Event::PickRequested => {
            if model.picking {
                return (model, vec![]);
            }
            (
                Model {
                    picking: true,
                    ..model
                },
                vec![Effect::PickImage],
            )
        }

        Event::PickDone(result) => {
            let picked = result.ok().and_then(|r| r.first_image());
            match picked {
                Some(image) => (
                    Model {
                        state: State::ImageSelected { image },
                        generation: model.generation + 1,
                        picking: false,
                        alert: None,
                    },
                    vec![],
                ),
                None => (
                    Model {
                        picking: false,
                        ..model
                    },
                    vec![],
                ),
            }
        }

        Event::AnalyzeRequested => {
            let Some(image) = model.state.image().cloned() else {
                return (
                    Model {
                        alert: Some(Alert::NoImageSelected),
                        ..model
                    },
                    vec![],
                );
            };

            let generation = model.generation + 1;
            let labels = model.state.labels().to_vec();

            (
                Model {
                    state: State::Analyzing {
                        image: image.clone(),
                        labels,
                        generation,
                    },
                    generation,
                    alert: None,
                    ..model
                },
                vec![Effect::AnalyzeImage { generation, image }],
            )
        }

        Event::AnalyzeDone { generation, result } => match model.state.clone() {
            State::Analyzing {
                image,
                labels,
                generation: pending,
            } if pending == generation && model.generation == generation => match result {
                Ok(found) => {
                    let alert = found.is_empty().then_some(Alert::NoLabelsFound);
                    (
                        Model {
                            state: State::settled(image, found),
                            alert,
                            ..model
                        },
                        vec![],
                    )
                }
                Err(_) => (
                    Model {
                        state: State::settled(image, labels),
                        alert: Some(Alert::AnalysisFailed),
                        ..model
                    },
                    vec![],
                ),
            },
            // Superseded by a reset, a new pick or a newer analyze
            _ => (model, vec![]),
        },

        Event::ResetRequested => (
            Model {
                state: State::Idle,
                generation: model.generation + 1,
                picking: model.picking,
                alert: None,
            },
            vec![],
        ),

        Event::AlertDismissed => (
            Model {
                alert: None,
                ..model
            },
            vec![],
        ),
    }
}
