use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    Committed,
    ReserveFailed,
    UploadFailed,
    CommitFailed,
}

impl FileOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, FileOutcome::Committed)
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileOutcome::Committed => "committed",
            FileOutcome::ReserveFailed => "reservation failed",
            FileOutcome::UploadFailed => "upload failed",
            FileOutcome::CommitFailed => "commit failed",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    pub file_name: String,
    pub outcome: FileOutcome,
}

/// Per-file outcomes of one batch, in upload order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn push(&mut self, file_name: &str, outcome: FileOutcome) {
        self.files.push(FileReport {
            file_name: file_name.to_string(),
            outcome,
        });
    }

    pub fn committed(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_success()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.outcome.is_success())
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Uploaded {}/{} screenshots",
            self.committed(),
            self.files.len()
        )];
        for f in self.failures() {
            lines.push(format!("  {}: {}", f.file_name, f.outcome));
        }
        lines
    }
}

#[cfg(test)]
#[path = "../tests/upload/report_tests.rs"]
mod tests;
