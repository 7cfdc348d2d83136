mod config;
mod device;
mod entities;
mod upload_ops;

pub use self::config::{
    AscConfig, AscSettings, Credentials, DEFAULT_API_BASE_URL, DEFAULT_CONFIG_PATH, DEFAULT_LOCALE,
};
pub use self::device::Device;
pub use self::entities::{AppVersion, Localization, ScreenshotReservation, ScreenshotSet};
pub use self::upload_ops::{RequestHeader, UploadOperation, validate_upload_operations};
