mod error;
mod http;
mod types;

use crate::upload::SelectedImage;
use async_trait::async_trait;
pub use error::UploadError;
pub use http::HttpDescribeClient;
pub use types::DescriptionResponse;

/// Sends an image to the description service.
#[async_trait]
pub trait DescribeClient: Send + Sync {
    async fn upload_image(&self, image: &SelectedImage)
        -> Result<DescriptionResponse, UploadError>;
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone)]
    pub enum Reply {
        Description(Option<String>),
        Failure,
    }

    /// Canned client that counts how often it was called.
    #[derive(Debug)]
    pub struct FakeClient {
        reply: Reply,
        calls: AtomicUsize,
    }

    impl FakeClient {
        pub fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DescribeClient for FakeClient {
        async fn upload_image(
            &self,
            _image: &SelectedImage,
        ) -> Result<DescriptionResponse, UploadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Reply::Description(description) => Ok(DescriptionResponse {
                    description: description.clone(),
                }),
                Reply::Failure => Err(UploadError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
            }
        }
    }
}
