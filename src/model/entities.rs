//! Read-only views of the remote resources the upload touches.

use super::UploadOperation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppVersion {
    pub id: String,
    pub state: Option<String>,
    pub version_string: Option<String>,
}

impl AppVersion {
    pub fn describe(&self) -> String {
        format!(
            "{} (state: {}, version: {})",
            self.id,
            self.state.as_deref().unwrap_or("?"),
            self.version_string.as_deref().unwrap_or("?")
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Localization {
    pub id: String,
    pub locale: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenshotSet {
    pub id: String,
    pub display_type: String,
}

/// A screenshot slot reserved on the server, with the byte ranges it expects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenshotReservation {
    pub id: String,
    pub upload_operations: Vec<UploadOperation>,
}
