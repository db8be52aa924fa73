use crate::client::DescribeClient;
use crate::upload::{SelectedImage, UploadOutcome, DESCRIPTION_NOT_FOUND};
use tracing::{error, info};

/// Runs one upload and turns the result into what the form displays.
///
/// An empty or missing `description` falls back to [`DESCRIPTION_NOT_FOUND`]. Every
/// failure is logged here and collapsed into [`UploadOutcome::Failed`].
pub async fn describe(client: &dyn DescribeClient, image: &SelectedImage) -> UploadOutcome {
    info!("Uploading image '{}' for description", image.name);

    match client.upload_image(image).await {
        Ok(response) => {
            let description = response
                .description
                .filter(|description| !description.is_empty())
                .unwrap_or_else(|| DESCRIPTION_NOT_FOUND.to_string());
            info!("Received description for '{}'", image.name);
            UploadOutcome::Described(description)
        }
        Err(e) => {
            error!("Error processing image '{}': {}", image.name, e);
            UploadOutcome::Failed
        }
    }
}
