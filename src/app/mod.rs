mod state;
mod ui;

use crate::client::DescribeClient;
use crate::upload::{describe, SelectedImage};
use eframe::{egui, App};
use state::FormState;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, info};

const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct ImageDescriber {
    state: FormState,
    client: Arc<dyn DescribeClient>,
    runtime: Handle,
}

impl ImageDescriber {
    pub fn new(client: Arc<dyn DescribeClient>, runtime: Handle) -> Self {
        info!("Initializing Image Describer");
        Self {
            state: FormState::default(),
            client,
            runtime,
        }
    }

    pub fn select_file(&mut self, path: PathBuf) {
        self.state.select_file(SelectedImage::from_path(path));
    }

    /// Starts an upload of the selected image. Returns false when nothing was sent.
    pub fn submit(&mut self) -> bool {
        let Some((image, sender)) = self.state.begin_upload() else {
            debug!("Submit ignored: no image selected or upload already running");
            return false;
        };

        info!("Starting upload of '{}'", image.name);
        let client = Arc::clone(&self.client);
        self.runtime.spawn(async move {
            let outcome = describe(client.as_ref(), &image).await;
            sender.send(outcome).unwrap_or_default();
        });

        true
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if self.state.poll_outcome() {
            ctx.request_repaint();
        } else if self.state.is_uploading {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }
    }
}

impl App for ImageDescriber {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
