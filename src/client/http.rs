use super::{DescribeClient, DescriptionResponse, UploadError};
use crate::upload::SelectedImage;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::debug;
use url::Url;

pub const UPLOAD_ENDPOINT: &str = "upload-images";
pub const IMAGE_FIELD: &str = "image";

#[derive(Clone, Debug)]
pub struct HttpDescribeClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpDescribeClient {
    pub fn new(base_url: Url) -> Result<Self, url::ParseError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: Url) -> Result<Self, url::ParseError> {
        let endpoint = endpoint_url(&base_url)?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Appends the upload endpoint to `base_url`, treating the base path as a directory.
fn endpoint_url(base_url: &Url) -> Result<Url, url::ParseError> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(UPLOAD_ENDPOINT)
}

#[async_trait]
impl DescribeClient for HttpDescribeClient {
    async fn upload_image(
        &self,
        image: &SelectedImage,
    ) -> Result<DescriptionResponse, UploadError> {
        let bytes = tokio::fs::read(image.path())
            .await
            .map_err(|source| UploadError::Read {
                path: image.path.clone(),
                source,
            })?;

        let mime = image.mime();
        let part = Part::bytes(bytes)
            .file_name(image.name.clone())
            .mime_str(mime.as_ref())
            .map_err(|source| UploadError::InvalidMime {
                mime: mime.to_string(),
                source,
            })?;
        let form = Form::new().part(IMAGE_FIELD, part);

        debug!("Uploading '{}' ({}) to {}", image.name, mime, self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.bytes().await?;
                Ok(serde_json::from_slice(&body)?)
            }
            status => Err(UploadError::Status(status)),
        }
    }
}
