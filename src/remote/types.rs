//! JSON:API envelopes for the App Store Connect resources used here.

use serde::{Deserialize, Serialize};

use super::*;

pub(super) const SCREENSHOT_SETS: &str = "appScreenshotSets";
pub(super) const SCREENSHOTS: &str = "appScreenshots";
pub(super) const LOCALIZATIONS: &str = "appStoreVersionLocalizations";

#[derive(Debug, Deserialize)]
pub(super) struct Document<T> {
    pub(super) data: T,
}

#[derive(Debug, Deserialize)]
pub(super) struct Resource<A> {
    pub(super) id: String,
    pub(super) attributes: A,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct VersionAttributes {
    #[serde(default)]
    pub(super) app_store_state: Option<String>,
    #[serde(default)]
    pub(super) version_string: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct LocalizationAttributes {
    pub(super) locale: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ScreenshotSetAttributes {
    pub(super) screenshot_display_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ScreenshotAttributes {
    #[serde(default)]
    pub(super) upload_operations: Option<Vec<UploadOperation>>,
}

impl From<Resource<VersionAttributes>> for AppVersion {
    fn from(r: Resource<VersionAttributes>) -> Self {
        AppVersion {
            id: r.id,
            state: r.attributes.app_store_state,
            version_string: r.attributes.version_string,
        }
    }
}

impl From<Resource<LocalizationAttributes>> for Localization {
    fn from(r: Resource<LocalizationAttributes>) -> Self {
        Localization {
            id: r.id,
            locale: r.attributes.locale,
        }
    }
}

impl From<Resource<ScreenshotSetAttributes>> for ScreenshotSet {
    fn from(r: Resource<ScreenshotSetAttributes>) -> Self {
        ScreenshotSet {
            id: r.id,
            display_type: r.attributes.screenshot_display_type,
        }
    }
}

impl From<Resource<ScreenshotAttributes>> for ScreenshotReservation {
    fn from(r: Resource<ScreenshotAttributes>) -> Self {
        ScreenshotReservation {
            id: r.id,
            upload_operations: r.attributes.upload_operations.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct WriteDocument<A, R> {
    pub(super) data: WriteResource<A, R>,
}

#[derive(Debug, Serialize)]
pub(super) struct WriteResource<A, R> {
    #[serde(rename = "type")]
    pub(super) kind: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) id: Option<String>,

    pub(super) attributes: A,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) relationships: Option<R>,
}

#[derive(Debug, Serialize)]
pub(super) struct Relationship {
    pub(super) data: Linkage,
}

#[derive(Debug, Serialize)]
pub(super) struct Linkage {
    #[serde(rename = "type")]
    pub(super) kind: &'static str,
    pub(super) id: String,
}

impl Relationship {
    pub(super) fn to(kind: &'static str, id: &str) -> Self {
        Relationship {
            data: Linkage {
                kind,
                id: id.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NewScreenshotSetAttributes {
    pub(super) screenshot_display_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NewScreenshotSetRelationships {
    pub(super) app_store_version_localization: Relationship,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NewScreenshotAttributes {
    pub(super) file_name: String,
    pub(super) file_size: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NewScreenshotRelationships {
    pub(super) app_screenshot_set: Relationship,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CommitScreenshotAttributes {
    pub(super) source_file_checksum: String,
    pub(super) uploaded: bool,
}

/// `relationships` placeholder for updates that carry none.
#[derive(Debug, Serialize)]
pub(super) struct NoRelationships {}
