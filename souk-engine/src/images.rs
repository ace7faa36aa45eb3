//! Image-upload collaborator boundary
//!
//! Turns a user-selected file into an embeddable image payload (a data
//! URI). The mechanism is a black box to the rest of the engine: a failed
//! read is a non-fatal collaborator failure and the triggering product save
//! proceeds without the affected field.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::path::Path;

use shared::{AppError, AppResult};

/// Collaborator turning a selected file into an embeddable payload
pub trait ImageSource: Send + Sync {
    /// Produce a data-URI payload for the file
    fn load_image(&self, file: &Path) -> AppResult<String>;
}

/// Reads files from the local filesystem
#[derive(Debug, Default)]
pub struct FileImageSource;

impl ImageSource for FileImageSource {
    fn load_image(&self, file: &Path) -> AppResult<String> {
        let bytes = std::fs::read(file)
            .map_err(|e| AppError::collaborator(format!("image read failed: {e}")))?;
        let mime = mime_guess::from_path(file).first_or_octet_stream();
        Ok(format!("data:{};base64,{}", mime.essence_str(), BASE64.encode(&bytes)))
    }
}

/// Resolve a batch of gallery uploads
///
/// Each file resolves independently; successes append in arrival order and
/// failures are logged and skipped so the upload as a whole never blocks
/// the admin form.
pub fn load_gallery(source: &dyn ImageSource, files: &[&Path]) -> Vec<String> {
    let mut payloads = Vec::with_capacity(files.len());
    for file in files {
        match source.load_image(file) {
            Ok(payload) => payloads.push(payload),
            Err(e) => tracing::warn!(file = %file.display(), error = %e, "gallery image skipped"),
        }
    }
    payloads
}
