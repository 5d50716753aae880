//! The sorting engine: a linear batch pipeline run once per user action.
//!
//! Order of operations: validate the designer count, create the destination
//! folders, enumerate and group the source files, then walk the groups in
//! round-robin order classifying, tagging and moving each file. Per-file
//! failures are logged and skipped; only enumeration and folder creation
//! are fatal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};
use walkdir::WalkDir;

use super::classify::{classify_file, Background};
use super::error::{MoveError, SortError, SortResult};
use super::groups::{self, FileGroup};
use super::tagging::{FinderTagger, Label, Tagger};

/// Engine state as seen by the shell's status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Idle,
    InProgress,
}

/// Observer interface for live status and count updates. The shell passes
/// a no-op sink and reads the final report instead; tests record the calls.
pub trait ProgressSink {
    fn status_changed(&mut self, _status: BatchStatus) {}
    fn file_moved(&mut self, _processed: usize) {}
}

/// Sink for callers that only care about the final report.
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {}

/// Aggregate result of one batch run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Files successfully moved. Files left behind by a failed move are
    /// not counted.
    pub processed: usize,
    /// Wall-clock duration of the batch.
    pub elapsed_secs: f64,
}

/// The Image Sorter. Generic over the tagging port so tests can inject a
/// fake and other platforms can run without Finder.
pub struct Sorter<T: Tagger> {
    tagger: T,
}

impl<T: Tagger> Sorter<T> {
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    /// Run one batch: distribute every supported image under `source` into
    /// `Designer_1 ..= Designer_N` folders, labeling each file before it
    /// moves.
    pub fn run(
        &self,
        source: &Path,
        designers: usize,
        progress: &mut dyn ProgressSink,
    ) -> SortResult<RunReport> {
        // Validation happens before any folder is created or file touched.
        if designers < 1 {
            return Err(SortError::Configuration(designers));
        }
        if !source.is_dir() {
            return Err(SortError::filesystem(
                source,
                io::Error::new(io::ErrorKind::NotFound, "source directory not found"),
            ));
        }

        let start = Instant::now();
        progress.status_changed(BatchStatus::InProgress);

        let folders = create_designer_folders(source, designers)?;
        let file_groups = enumerate_groups(source)?;

        info!(
            groups = file_groups.len(),
            designers,
            source = %source.display(),
            "distributing image groups"
        );

        let mut processed = 0usize;
        for (index, group) in file_groups.iter().enumerate() {
            // Group-atomic: the whole identifier group goes to one folder.
            let folder = &folders[groups::designer_for_group(index, designers) - 1];

            for filename in &group.filenames {
                let path = source.join(filename);

                let label = self.pick_label(&path, filename);
                if let Err(e) = self.tagger.apply_label(&path, label) {
                    warn!(file = %filename, error = %e, "labeling failed, moving anyway");
                }

                match move_file(&path, folder, filename) {
                    Ok(()) => {
                        processed += 1;
                        progress.file_moved(processed);
                    }
                    Err(e) => {
                        warn!(error = %e, "move failed, leaving file in place");
                    }
                }
            }
        }

        progress.status_changed(BatchStatus::Idle);
        let elapsed_secs = start.elapsed().as_secs_f64();
        info!(processed, elapsed_secs, "batch complete");

        Ok(RunReport {
            processed,
            elapsed_secs,
        })
    }

    /// Decide the label for one file. PNGs commonly carry transparency or
    /// gray mattes, so they skip pixel inspection and always get green;
    /// everything else is labeled by the white-corner heuristic, with
    /// classification failures defaulting to the more visible green.
    fn pick_label(&self, path: &Path, filename: &str) -> Label {
        if groups::has_extension(filename, "png") {
            return Label::Green;
        }

        match classify_file(path) {
            Ok(Background::White) => Label::Yellow,
            Ok(Background::NonWhite) => Label::Green,
            Err(e) => {
                warn!(error = %e, "classification failed, defaulting to non-white");
                Label::Green
            }
        }
    }
}

/// Create `Designer_1 ..= Designer_N` inside the source folder. Creation
/// failure is fatal for the batch.
fn create_designer_folders(source: &Path, designers: usize) -> SortResult<Vec<PathBuf>> {
    let mut folders = Vec::with_capacity(designers);
    for i in 1..=designers {
        let folder = source.join(format!("Designer_{i}"));
        fs::create_dir_all(&folder).map_err(|e| SortError::filesystem(&folder, e))?;
        folders.push(folder);
    }
    Ok(folders)
}

/// Flat listing of the source folder, filtered to supported images and
/// grouped by identifier. Listing order is whatever the platform returns;
/// groups keep the first-seen order of their identifiers.
fn enumerate_groups(source: &Path) -> SortResult<Vec<FileGroup>> {
    let mut filenames = Vec::new();

    for entry in WalkDir::new(source).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let io_err = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("directory walk failed"));
            SortError::filesystem(source, io_err)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().to_string();
        if groups::is_supported_image(&filename) {
            filenames.push(filename);
        }
    }

    Ok(groups::build_groups(filenames))
}

fn move_file(path: &Path, folder: &Path, filename: &str) -> Result<(), MoveError> {
    let dest = folder.join(filename);
    fs::rename(path, &dest).map_err(|source| MoveError {
        path: path.to_path_buf(),
        dest,
        source,
    })
}

/// Async entry point for the shell. Runs the blocking pipeline on a worker
/// thread so the UI stays responsive, and flattens errors to strings for
/// the status label.
pub async fn run_batch(source: PathBuf, designers: usize) -> Result<RunReport, String> {
    tokio::task::spawn_blocking(move || {
        Sorter::new(FinderTagger)
            .run(&source, designers, &mut NullProgress)
            .map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("task join error: {e}"))?
}
