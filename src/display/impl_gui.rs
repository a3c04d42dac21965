use crate::config::Config;
use crate::image_source::interface::ImageReference;
use crate::library::logger::interface::Logger;
use crate::session::core::Event;
use crate::session::main::Session;
use crate::session::render::{render, View};
use eframe::egui;
use std::sync::Arc;

const BUTTON_FILL: egui::Color32 = egui::Color32::from_rgb(0xDD, 0xDD, 0xDD);
const RESET_FILL: egui::Color32 = egui::Color32::from_rgb(0xD0, 0x21, 0x21);

struct Preview {
    image: ImageReference,
    texture: Option<egui::TextureHandle>,
}

pub struct LabelLensWindow {
    session: Session,
    logger: Arc<dyn Logger + Send + Sync>,
    preview_size: f32,
    preview: Option<Preview>,
}

impl LabelLensWindow {
    pub fn new(session: Session, logger: Arc<dyn Logger + Send + Sync>, preview_size: f32) -> Self {
        Self {
            session,
            logger: logger.with_namespace("display").with_namespace("gui"),
            preview_size,
            preview: None,
        }
    }

    /// Decodes the picked image once per reference; a failed decode is
    /// remembered so it is not retried every frame.
    fn texture_for(
        &mut self,
        ctx: &egui::Context,
        image: &ImageReference,
    ) -> Option<egui::TextureHandle> {
        if let Some(preview) = &self.preview {
            if &preview.image == image {
                return preview.texture.clone();
            }
        }

        let texture = match image::open(image.path()) {
            Ok(decoded) => {
                let rgba = decoded.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                Some(ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR))
            }
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("Error loading preview for {}: {}", image, e));
                None
            }
        };

        self.preview = Some(Preview {
            image: image.clone(),
            texture: texture.clone(),
        });

        texture
    }

    fn draw(&self, ui: &mut egui::Ui, view: &View, texture: Option<&egui::TextureHandle>) -> Vec<Event> {
        let mut events = vec![];

        ui.vertical_centered(|ui| {
            ui.add_space(20.0);

            if let Some(texture) = texture {
                ui.add(
                    egui::Image::new(texture)
                        .max_size(egui::vec2(self.preview_size, self.preview_size))
                        .maintain_aspect_ratio(true),
                );
            } else if let Some(image) = &view.image {
                ui.label(format!("{}", image));
            }

            ui.add_space(20.0);
            let pick = egui::Button::new(egui::RichText::new("Choose an Image...").size(20.0).strong())
                .fill(BUTTON_FILL);
            if ui.add_enabled(view.pick_enabled, pick).clicked() {
                events.push(Event::PickRequested);
            }

            ui.add_space(20.0);
            let analyze = egui::Button::new(egui::RichText::new("Analyze Image.").size(20.0).strong())
                .fill(BUTTON_FILL);
            if ui.add(analyze).clicked() {
                events.push(Event::AnalyzeRequested);
            }

            if view.analyzing {
                ui.add_space(10.0);
                ui.spinner();
            }

            if !view.labels.is_empty() {
                ui.add_space(20.0);
                ui.label(egui::RichText::new("Labels:").size(20.0).strong());
                ui.add_space(10.0);
                for label in &view.labels {
                    ui.label(egui::RichText::new(label).size(18.0));
                    ui.add_space(8.0);
                }
            }

            if view.show_reset {
                ui.add_space(10.0);
                let reset = egui::Button::new(
                    egui::RichText::new("Reset")
                        .color(egui::Color32::WHITE)
                        .strong(),
                )
                .fill(RESET_FILL)
                .rounding(5.0);
                if ui.add(reset).clicked() {
                    events.push(Event::ResetRequested);
                }
            }
        });

        events
    }
}

impl eframe::App for LabelLensWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.session.pump();

        let view = render(self.session.model());
        let texture = match &view.image {
            Some(image) => self.texture_for(ctx, image),
            None => {
                self.preview = None;
                None
            }
        };

        let mut events = vec![];

        egui::CentralPanel::default().show(ctx, |ui| {
            events.extend(self.draw(ui, &view, texture.as_ref()));
        });

        if let Some(message) = view.alert {
            egui::Window::new("Label Lens")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        events.push(Event::AlertDismissed);
                    }
                });
        }

        for event in events {
            self.session.dispatch(event);
        }
    }
}

pub fn run(
    config: &Config,
    session: Session,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Label Lens"),
        ..Default::default()
    };
    let preview_size = config.preview_size;

    eframe::run_native(
        "Label Lens",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            session.set_waker(Arc::new(move || ctx.request_repaint()));
            Box::new(LabelLensWindow::new(session, logger, preview_size))
        }),
    )
}
