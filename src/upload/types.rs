use mime_guess::mime::Mime;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions offered by the file picker. Advisory only, any file can be submitted.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff"];

pub const DESCRIPTION_NOT_FOUND: &str = "Description not found.";
pub const UPLOAD_FAILED: &str = "Error processing the image.";

/// Handle to a file the user picked. The bytes are read when the upload runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub name: String,
    pub size: Option<u64>,
}

impl SelectedImage {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let size = fs::metadata(&path).ok().map(|meta| meta.len());

        Self { path, name, size }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mime(&self) -> Mime {
        mime_guess::from_path(&self.path).first_or_octet_stream()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Described(String),
    Failed,
}

impl UploadOutcome {
    /// Text shown in the result area for this outcome.
    pub fn into_text(self) -> String {
        match self {
            UploadOutcome::Described(description) => description,
            UploadOutcome::Failed => UPLOAD_FAILED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    #[case("cat.png", "image/png")]
    #[case("cat.JPG", "image/jpeg")]
    #[case("cat.jpeg", "image/jpeg")]
    #[case("cat.gif", "image/gif")]
    #[case("cat.webp", "image/webp")]
    #[case("notes", "application/octet-stream")]
    fn guesses_mime_from_extension(#[case] file: &str, #[case] expected: &str) {
        let image = SelectedImage::from_path(file);
        assert_eq!(image.mime().as_ref(), expected);
    }

    #[test]
    fn picker_extensions_are_images() {
        for ext in IMAGE_EXTENSIONS {
            let image = SelectedImage::from_path(format!("picked.{ext}"));
            assert_eq!(image.mime().type_(), mime_guess::mime::IMAGE, "{ext}");
        }
    }

    #[test]
    fn reads_name_and_size_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bird.png");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0u8; 42]).unwrap();

        let image = SelectedImage::from_path(&path);
        assert_eq!(image.name, "bird.png");
        assert_eq!(image.size, Some(42));
        assert_eq!(image.path(), path.as_path());
    }

    #[test]
    fn missing_file_has_no_size() {
        let image = SelectedImage::from_path("/definitely/not/here.png");
        assert_eq!(image.name, "here.png");
        assert_eq!(image.size, None);
    }

    #[test]
    fn outcome_text() {
        assert_eq!(
            UploadOutcome::Described("a cat".to_string()).into_text(),
            "a cat"
        );
        assert_eq!(UploadOutcome::Failed.into_text(), UPLOAD_FAILED);
    }
}
