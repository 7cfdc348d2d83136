//! Reserve, upload and commit for a single screenshot.

use super::*;

impl AscClient {
    /// Reserves a screenshot slot in `set_id` for `file`.
    ///
    /// Returns `None` when the server rejects the reservation.
    pub fn reserve_screenshot(
        &self,
        set_id: &str,
        file: &LocalScreenshot,
    ) -> Result<Option<ScreenshotReservation>> {
        let file_size = file.size()?;
        // Not part of the reservation payload; the commit recomputes it.
        let checksum = file.md5_hex()?;
        tracing::debug!(file = %file.file_name, file_size, %checksum, "reserving screenshot");

        let body = WriteDocument {
            data: WriteResource {
                kind: SCREENSHOTS,
                id: None,
                attributes: NewScreenshotAttributes {
                    file_name: file.file_name.clone(),
                    file_size,
                },
                relationships: Some(NewScreenshotRelationships {
                    app_screenshot_set: Relationship::to(SCREENSHOT_SETS, set_id),
                }),
            },
        };
        let resp = self.api_request(Method::POST, "/v1/appScreenshots", Some(&body), &[])?;

        if !resp.status().is_success() {
            println!("    Error reserving screenshot: {}", resp.status().as_u16());
            println!("{}", error_body(resp));
            return Ok(None);
        }

        let doc: Document<Resource<ScreenshotAttributes>> =
            resp.json().context("parse screenshot reservation")?;
        let reservation = ScreenshotReservation::from(doc.data);
        println!(
            "    Reserved screenshot: {} ({} upload operations)",
            reservation.id,
            reservation.upload_operations.len()
        );
        Ok(Some(reservation))
    }

    /// Sends each byte range as instructed, stopping at the first failed part.
    ///
    /// Upload URLs are pre-signed; the bearer token is not sent to them.
    pub fn upload_parts(&self, file: &LocalScreenshot, ops: &[UploadOperation]) -> Result<bool> {
        let bytes = file.read()?;
        if let Err(err) = validate_upload_operations(ops, bytes.len() as u64) {
            println!("    Invalid upload operations: {:#}", err);
            return Ok(false);
        }

        for (i, op) in ops.iter().enumerate() {
            let method = Method::from_bytes(op.method.as_bytes())
                .with_context(|| format!("upload operation method {:?}", op.method))?;
            let chunk = bytes
                .get(op.byte_range()?)
                .context("upload operation range outside file")?;
            tracing::debug!(part = i + 1, offset = op.offset, length = op.length, url = %op.url, "uploading part");

            let mut req = self.client.request(method, &op.url);
            for h in &op.request_headers {
                req = req.header(h.name.as_str(), h.value.as_str());
            }
            let resp = req
                .body(chunk.to_vec())
                .send()
                .with_context(|| format!("upload part {}", i + 1))?;

            if resp.status().is_success() {
                println!("    Part {}/{} uploaded OK", i + 1, ops.len());
            } else {
                let status = resp.status().as_u16();
                let text = resp.text().unwrap_or_default();
                let snippet: String = text.chars().take(200).collect();
                println!("    Part {} FAILED: {} {}", i + 1, status, snippet);
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Marks the screenshot uploaded, supplying the file's MD5 checksum.
    pub fn commit_screenshot(&self, screenshot_id: &str, file: &LocalScreenshot) -> Result<bool> {
        let checksum = file.md5_hex()?;
        let body = WriteDocument::<_, NoRelationships> {
            data: WriteResource {
                kind: SCREENSHOTS,
                id: Some(screenshot_id.to_string()),
                attributes: CommitScreenshotAttributes {
                    source_file_checksum: checksum,
                    uploaded: true,
                },
                relationships: None,
            },
        };
        let resp = self.api_request(
            Method::PATCH,
            &format!("/v1/appScreenshots/{}", screenshot_id),
            Some(&body),
            &[],
        )?;

        if resp.status().is_success() {
            println!("    Screenshot committed successfully");
            Ok(true)
        } else {
            println!("    Error committing: {}", resp.status().as_u16());
            println!("{}", error_body(resp));
            Ok(false)
        }
    }
}
