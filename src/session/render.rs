use crate::image_source::interface::ImageReference;
use crate::session::core::{Model, State};

/// Everything the screen shows, derived from the model alone.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub image: Option<ImageReference>,
    pub labels: Vec<String>,
    pub show_reset: bool,
    pub analyzing: bool,
    pub pick_enabled: bool,
    pub alert: Option<&'static str>,
}

pub fn render(model: &Model) -> View {
    let labels: Vec<String> = model
        .state
        .labels()
        .iter()
        .map(|label| label.description.clone())
        .collect();

    View {
        image: model.state.image().cloned(),
        show_reset: !labels.is_empty(),
        labels,
        analyzing: matches!(model.state, State::Analyzing { .. }),
        pick_enabled: !model.picking,
        alert: model.alert.map(|alert| alert.message()),
    }
}
