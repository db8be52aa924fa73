use crate::upload::{SelectedImage, UploadOutcome, UPLOAD_FAILED};
use derivative::Derivative;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use tracing::{debug, warn};

pub const SUBMIT_LABEL: &str = "Upload and describe";
pub const SUBMIT_LABEL_BUSY: &str = "Sending...";

/// Everything the upload form renders from.
#[derive(Derivative, Default)]
#[derivative(Debug)]
pub struct FormState {
    pub selected: Option<SelectedImage>,
    pub description: String,
    pub is_uploading: bool,
    #[derivative(Debug = "ignore")]
    pub outcome_receiver: Option<Receiver<UploadOutcome>>,
}

impl FormState {
    pub fn select_file(&mut self, image: SelectedImage) {
        debug!("Selected image: {:?}", image.path);
        self.selected = Some(image);
        self.description.clear();
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.is_uploading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_uploading {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL
        }
    }

    /// Marks the form busy and hands out what the upload task needs.
    ///
    /// Returns `None` without touching any state when nothing is selected or an
    /// upload is already in flight.
    pub fn begin_upload(&mut self) -> Option<(SelectedImage, Sender<UploadOutcome>)> {
        if !self.can_submit() {
            return None;
        }
        let image = self.selected.clone()?;

        let (sender, receiver) = mpsc::channel();
        self.outcome_receiver = Some(receiver);
        self.is_uploading = true;

        Some((image, sender))
    }

    /// Applies a finished upload, if any. Returns true when the state changed.
    pub fn poll_outcome(&mut self) -> bool {
        let Some(receiver) = &self.outcome_receiver else {
            return false;
        };

        let outcome = match receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                warn!("Upload task ended without reporting an outcome");
                UploadOutcome::Failed
            }
        };

        self.finish_upload(outcome);
        true
    }

    fn finish_upload(&mut self, outcome: UploadOutcome) {
        self.description = outcome.into_text();
        self.is_uploading = false;
        self.outcome_receiver = None;
    }
}
