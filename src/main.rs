mod app;
mod client;
mod config;
mod upload;
mod utils;

use app::ImageDescriber;
use clap::Parser;
use client::HttpDescribeClient;
use config::Opts;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

fn log_init(debug: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let env_filter =
        EnvFilter::from_default_env().add_directive(format!("image_describer={level}").parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_line_number(true)
        .init();

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Opts::parse();
    log_init(opts.debug)?;
    info!("opts: {:?}", opts);

    let runtime = tokio::runtime::Runtime::new()?;
    let client = HttpDescribeClient::new(opts.base_url)?;
    info!("Uploading images to {}", client.endpoint());

    let handle = runtime.handle().clone();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([480.0, 520.0])
            .with_min_inner_size([360.0, 400.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Image Describer",
        options,
        Box::new(move |_cc| Box::new(ImageDescriber::new(Arc::new(client), handle))),
    ) {
        error!("Application stopped with error: {e}");
    }

    Ok(())
}
