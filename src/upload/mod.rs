mod describer;
mod types;

pub use describer::describe;
pub use types::{
    SelectedImage, UploadOutcome, DESCRIPTION_NOT_FOUND, IMAGE_EXTENSIONS, UPLOAD_FAILED,
};
