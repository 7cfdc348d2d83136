use std::ops::Range;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestHeader {
    pub name: String,
    pub value: String,
}

/// One server-issued instruction: send `length` bytes starting at `offset` to `url`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOperation {
    pub method: String,
    pub url: String,
    pub offset: u64,
    pub length: u64,

    #[serde(default)]
    pub request_headers: Vec<RequestHeader>,
}

impl UploadOperation {
    pub fn end(&self) -> Option<u64> {
        self.offset.checked_add(self.length)
    }

    pub fn byte_range(&self) -> Result<Range<usize>> {
        let end = self.end().context("upload operation range overflows")?;
        let start = usize::try_from(self.offset).context("upload operation offset")?;
        let end = usize::try_from(end).context("upload operation end")?;
        Ok(start..end)
    }
}

/// Checks that `ops` cover `[0, file_size)` exactly once.
///
/// Operations may arrive in any order; they are still sent in the order given.
pub fn validate_upload_operations(ops: &[UploadOperation], file_size: u64) -> Result<()> {
    if ops.is_empty() {
        if file_size == 0 {
            return Ok(());
        }
        anyhow::bail!("no upload operations for a {} byte file", file_size);
    }

    let mut sorted: Vec<&UploadOperation> = ops.iter().collect();
    sorted.sort_by_key(|op| op.offset);

    let mut expected = 0u64;
    for op in sorted {
        if op.length == 0 {
            anyhow::bail!("zero-length upload operation at offset {}", op.offset);
        }
        if op.offset < expected {
            anyhow::bail!(
                "upload operations overlap at offset {} (previous range ends at {})",
                op.offset,
                expected
            );
        }
        if op.offset > expected {
            anyhow::bail!(
                "upload operations leave a gap between {} and {}",
                expected,
                op.offset
            );
        }
        expected = op.end().context("upload operation range overflows")?;
    }

    if expected != file_size {
        anyhow::bail!(
            "upload operations cover {} bytes but the file has {}",
            expected,
            file_size
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/model/upload_ops_tests.rs"]
mod tests;
