use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::Device;

/// A `.png` on disk, identified by its file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalScreenshot {
    pub file_name: String,
    pub path: PathBuf,
}

impl LocalScreenshot {
    pub fn new(path: PathBuf) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("screenshot file name {}", path.display()))?
            .to_string();
        Ok(Self { file_name, path })
    }

    pub fn size(&self) -> Result<u64> {
        let meta = std::fs::metadata(&self.path)
            .with_context(|| format!("stat {}", self.path.display()))?;
        Ok(meta.len())
    }

    pub fn read(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).with_context(|| format!("read {}", self.path.display()))
    }

    /// Hex MD5 of the file contents, read fresh from disk on every call.
    pub fn md5_hex(&self) -> Result<String> {
        let bytes = self.read()?;
        Ok(format!("{:x}", md5::compute(&bytes)))
    }
}

/// Lists the `.png` files directly inside `dir`, sorted by file name.
pub fn list_screenshots(dir: &Path) -> Result<Vec<LocalScreenshot>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read screenshot dir {}", dir.display()))?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!(path = %entry.path().display(), "skipping non-utf8 file name");
            continue;
        };
        if !name.ends_with(".png") {
            continue;
        }
        let file_type = entry
            .file_type()
            .with_context(|| format!("file type {}", entry.path().display()))?;
        if !file_type.is_file() {
            continue;
        }
        out.push(LocalScreenshot {
            file_name: name,
            path: entry.path(),
        });
    }
    out.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(out)
}

/// `dir` if given (relative to `project_root`), else `app/screenshots/<device>`.
pub fn screenshot_dir(project_root: &Path, device: Device, dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(d) if d.is_absolute() => d.to_path_buf(),
        Some(d) => project_root.join(d),
        None => project_root
            .join("app")
            .join("screenshots")
            .join(device.code()),
    }
}

#[cfg(test)]
#[path = "../tests/upload/files_tests.rs"]
mod tests;
