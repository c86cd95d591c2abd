use crate::config::CleanupConfig;
use crate::error::{FenceStripError, Result};
use crate::stripper::fence::FencePatterns;
use crate::stripper::store::FileStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// What happened to a single target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub filename: String,
    pub path: PathBuf,
    pub bytes_before: u64,
    pub bytes_after: u64,
    pub opening_removed: bool,
    pub closing_removed: bool,
    pub written: bool,
}

impl FileOutcome {
    pub fn changed(&self) -> bool {
        self.opening_removed || self.closing_removed
    }

    pub fn markers_summary(&self) -> &'static str {
        match (self.opening_removed, self.closing_removed) {
            (true, true) => "opening and closing fences removed",
            (true, false) => "opening fence removed",
            (false, true) => "closing fence removed",
            (false, false) => "no fence found",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CleanupReport {
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
}

impl CleanupReport {
    pub fn files_changed(&self) -> usize {
        self.files.iter().filter(|f| f.changed()).count()
    }

    pub fn bytes_removed(&self) -> u64 {
        self.files
            .iter()
            .map(|f| f.bytes_before.saturating_sub(f.bytes_after))
            .sum()
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Runs the read, strip, overwrite cycle over every configured target.
///
/// Files are handled strictly one after another. The first failure ends
/// the run: the failing file and everything after it in the list are left
/// alone (a failed write may leave a partial file behind).
pub struct Cleaner<'a> {
    config: &'a CleanupConfig,
    store: &'a dyn FileStore,
    patterns: FencePatterns,
    dry_run: bool,
}

impl<'a> Cleaner<'a> {
    pub fn new(config: &'a CleanupConfig, store: &'a dyn FileStore) -> Self {
        Self {
            config,
            store,
            patterns: FencePatterns::new(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self, on_file: Option<&dyn Fn(&FileOutcome)>) -> Result<CleanupReport> {
        let started_at = Utc::now();
        let start = Instant::now();
        let mut files = Vec::with_capacity(self.config.files.len());

        for (filename, path) in self.config.targets() {
            let outcome = self.clean_file(filename, path)?;

            if let Some(callback) = on_file {
                callback(&outcome);
            }

            files.push(outcome);
        }

        Ok(CleanupReport {
            started_at,
            duration_ms: start.elapsed().as_millis() as u64,
            dry_run: self.dry_run,
            files,
        })
    }

    fn clean_file(&self, filename: &str, path: PathBuf) -> Result<FileOutcome> {
        let bytes = self
            .store
            .read(&path)
            .map_err(|e| FenceStripError::io(&path, e))?;
        let bytes_before = bytes.len() as u64;

        let content = String::from_utf8(bytes).map_err(|e| FenceStripError::Encoding {
            path: path.clone(),
            source: e,
        })?;

        let stripped = self.patterns.strip(&content);

        if !self.dry_run {
            self.store
                .write(&path, stripped.content.as_bytes())
                .map_err(|e| FenceStripError::io(&path, e))?;
        }

        Ok(FileOutcome {
            filename: filename.to_string(),
            path,
            bytes_before,
            bytes_after: stripped.content.len() as u64,
            opening_removed: stripped.opening_removed,
            closing_removed: stripped.closing_removed,
            written: !self.dry_run,
        })
    }
}
