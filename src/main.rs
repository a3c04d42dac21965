use config::Config;
use encoder::impl_file::EncoderFile;
use image_source::impl_native::ImageSourceNative;
use label_client::impl_google_vision::LabelClientGoogleVision;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use session::main::Session;
use std::sync::Arc;

mod config;
mod display;
mod encoder;
mod error;
mod image_source;
mod label_client;
mod library;
mod session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_source = Arc::new(ImageSourceNative::new(logger.clone()));

    let encoder = Arc::new(EncoderFile::new(logger.clone()));

    if config.vision_api_key.is_none() {
        let _ = logger.error(&format!(
            "{} is not set, every analysis will fail",
            config::ENV_VISION_API_KEY
        ));
    }

    let label_client = Arc::new(LabelClientGoogleVision::new(&config, logger.clone()));

    let session = Session::new(
        config.clone(),
        logger.clone(),
        image_source,
        encoder,
        label_client,
    );

    display::impl_gui::run(&config, session, logger)?;

    Ok(())
}
