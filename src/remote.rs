use anyhow::{Context, Result};
use reqwest::Method;

use crate::model::{
    AppVersion, Device, Localization, ScreenshotReservation, ScreenshotSet, UploadOperation,
    validate_upload_operations,
};
use crate::upload::LocalScreenshot;

mod http_client;
use self::http_client::error_body;

mod types;
use self::types::*;
mod localizations;
mod screenshot_sets;
mod screenshots;
mod versions;

pub use self::localizations::select_localization;
pub use self::screenshot_sets::find_screenshot_set;
pub use self::versions::PENDING_VERSION_STATE;

/// Blocking App Store Connect client holding one bearer token.
pub struct AscClient {
    base_url: String,
    token: String,
    client: reqwest::blocking::Client,
}

impl AscClient {
    pub fn new(base_url: impl Into<String>, token: String) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("shotlift")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.into(),
            token,
            client,
        })
    }
}
