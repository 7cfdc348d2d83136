//! One upload run: token, version, localization, screenshot set, then each file in turn.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::auth::issue_token_now;
use crate::model::{AscSettings, Device};
use crate::remote::{AscClient, select_localization};

mod files;
mod report;

pub use self::files::{LocalScreenshot, list_screenshots, screenshot_dir};
pub use self::report::{BatchReport, FileOutcome, FileReport};

#[derive(Clone, Debug)]
pub struct UploadPlan {
    pub settings: AscSettings,
    pub device: Device,
    pub screenshot_dir: PathBuf,
}

/// Runs the whole pipeline.
///
/// Returns `Err` only when nothing can be uploaded (no version, no localization, no set, bad
/// credentials). Per-file failures are recorded in the report instead.
pub fn run(plan: &UploadPlan) -> Result<BatchReport> {
    let files = list_screenshots(&plan.screenshot_dir)?;

    println!(
        "=== App Store Connect Screenshot Upload ({}) ===",
        plan.device
    );
    println!();
    println!("1. Generating JWT token...");
    let token = issue_token_now(&plan.settings.credentials)?;
    println!("   Token generated OK");
    let client = AscClient::new(plan.settings.api_base_url.clone(), token)?;

    println!();
    println!("2. Getting app store version...");
    let version = client
        .find_pending_version(&plan.settings.app_id)?
        .context("No version found")?;

    println!();
    println!("3. Getting localizations...");
    let localizations = client.list_localizations(&version.id)?;
    let localization = select_localization(&localizations, &plan.settings.locale)
        .context("No localizations found")?;
    if localization.locale != plan.settings.locale {
        tracing::warn!(
            preferred = %plan.settings.locale,
            using = %localization.locale,
            "preferred locale not found"
        );
    }
    println!(
        "   Using localization: {} ({})",
        localization.locale, localization.id
    );

    println!();
    println!("4. Getting existing screenshot sets...");
    let set = client
        .resolve_screenshot_set(&localization.id, plan.device)?
        .context("Could not create screenshot set")?;

    println!();
    println!("5. Uploading {} screenshots...", files.len());
    let report = upload_batch(&client, &set.id, &files);

    println!();
    for line in report.summary_lines() {
        println!("{}", line);
    }
    println!();
    println!("=== Done! ===");
    Ok(report)
}

/// Uploads `files` one after another; a failed file never stops the batch.
pub fn upload_batch(client: &AscClient, set_id: &str, files: &[LocalScreenshot]) -> BatchReport {
    let mut report = BatchReport::default();
    for (i, file) in files.iter().enumerate() {
        println!();
        match file.size() {
            Ok(size) => println!(
                "  [{}/{}] {} ({} bytes)",
                i + 1,
                files.len(),
                file.file_name,
                size
            ),
            Err(_) => println!("  [{}/{}] {}", i + 1, files.len(), file.file_name),
        }
        let outcome = upload_file(client, set_id, file);
        report.push(&file.file_name, outcome);
    }
    report
}

pub fn upload_file(client: &AscClient, set_id: &str, file: &LocalScreenshot) -> FileOutcome {
    let reservation = match client.reserve_screenshot(set_id, file) {
        Ok(Some(r)) => r,
        Ok(None) => {
            println!("    SKIPPING {}", file.file_name);
            return FileOutcome::ReserveFailed;
        }
        Err(err) => {
            println!("    Error reserving screenshot: {:#}", err);
            println!("    SKIPPING {}", file.file_name);
            return FileOutcome::ReserveFailed;
        }
    };

    match client.upload_parts(file, &reservation.upload_operations) {
        Ok(true) => {}
        Ok(false) => {
            println!("    UPLOAD FAILED for {}", file.file_name);
            return FileOutcome::UploadFailed;
        }
        Err(err) => {
            println!("    Upload error: {:#}", err);
            println!("    UPLOAD FAILED for {}", file.file_name);
            return FileOutcome::UploadFailed;
        }
    }

    match client.commit_screenshot(&reservation.id, file) {
        Ok(true) => FileOutcome::Committed,
        Ok(false) => FileOutcome::CommitFailed,
        Err(err) => {
            println!("    Error committing: {:#}", err);
            FileOutcome::CommitFailed
        }
    }
}
