use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.appstoreconnect.apple.com";
pub const DEFAULT_LOCALE: &str = "ja";
pub const DEFAULT_CONFIG_PATH: &str = ".appstoreconnect/config.json";

/// On-disk configuration (`.appstoreconnect/config.json`).
///
/// Every field is optional so the file can be partial; command line flags fill in the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AscConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    /// Relative paths resolve against the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key_path: Option<PathBuf>,

    /// Preferred localization; falls back to the first one the version has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

/// Identity used to sign API tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub issuer_id: String,
    pub key_id: String,
    pub private_key_path: PathBuf,
}

/// Fully resolved settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AscSettings {
    pub credentials: Credentials,
    pub app_id: String,
    pub locale: String,
    pub api_base_url: String,
}

impl AscConfig {
    /// Reads the config file; a missing file yields an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }
        let bytes =
            std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let cfg: AscConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(cfg)
    }

    /// Fields set in `overrides` replace the ones in `self`.
    pub fn merge(self, overrides: AscConfig) -> AscConfig {
        AscConfig {
            issuer_id: overrides.issuer_id.or(self.issuer_id),
            key_id: overrides.key_id.or(self.key_id),
            app_id: overrides.app_id.or(self.app_id),
            private_key_path: overrides.private_key_path.or(self.private_key_path),
            locale: overrides.locale.or(self.locale),
            api_base_url: overrides.api_base_url.or(self.api_base_url),
        }
    }

    pub fn resolve(self, project_root: &Path) -> Result<AscSettings> {
        let issuer_id = self
            .issuer_id
            .context("no issuer id configured (set issuer_id in the config, --issuer-id or ASC_ISSUER_ID)")?;
        let key_id = self
            .key_id
            .context("no key id configured (set key_id in the config, --key-id or ASC_KEY_ID)")?;
        let app_id = self
            .app_id
            .context("no app id configured (set app_id in the config, --app-id or ASC_APP_ID)")?;

        let private_key_path = match self.private_key_path {
            Some(p) if p.is_absolute() => p,
            Some(p) => project_root.join(p),
            None => default_private_key_path(project_root, &key_id),
        };

        Ok(AscSettings {
            credentials: Credentials {
                issuer_id,
                key_id,
                private_key_path,
            },
            app_id,
            locale: self.locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            api_base_url: self
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        })
    }
}

pub(crate) fn default_private_key_path(project_root: &Path, key_id: &str) -> PathBuf {
    project_root
        .join(".appstoreconnect")
        .join("private_keys")
        .join(format!("AuthKey_{}.p8", key_id))
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;
