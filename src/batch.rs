//! # Batch Conversion
//!
//! Runs a [`Job`] over one or more files. Each file is isolated: a failure is
//! reported with the file name and the run continues with the next file.
//! Files are processed sequentially; nothing is retried and a failed file
//! simply produces no output.
//!
//! Console lines go to the injected writer so callers (and tests) decide
//! where they end up. Diagnostics go through `log`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::Job;
use crate::error::{ConvertError, ConvertResult, HasRecoverySuggestion};
use crate::naming::{display_name, output_path};
use crate::processing::compose;
use crate::store::ImageStore;

/// Outcome counts of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.converted + self.failed
    }
}

/// Convert one file and return the path written.
pub fn convert_file<S: ImageStore + ?Sized>(
    path: &Path,
    job: &Job,
    store: &S,
) -> ConvertResult<PathBuf> {
    let start = Instant::now();
    let source = store.load(path)?;
    let composed = compose(&source, job)?;
    let out = output_path(path, job.suffix());
    store.save_jpeg(&out, &composed, job.quality())?;
    log::info!(
        "{} -> {} ({}x{}) in {:.2?}",
        path.display(),
        out.display(),
        composed.width(),
        composed.height(),
        start.elapsed()
    );
    Ok(out)
}

/// Convert every file in order, reporting progress and failures to `out`.
///
/// Only a failure to write to `out` aborts the run.
pub fn convert_files<S, W>(
    files: &[PathBuf],
    job: &Job,
    store: &S,
    out: &mut W,
) -> ConvertResult<BatchSummary>
where
    S: ImageStore + ?Sized,
    W: Write + ?Sized,
{
    let mut summary = BatchSummary::default();
    for file in files {
        let name = display_name(file);
        writeln!(out, "Converting {}", name).map_err(|e| ConvertError::io("write report", e))?;
        match convert_file(file, job, store) {
            Ok(_) => summary.converted += 1,
            Err(e) => {
                summary.failed += 1;
                log::info!(
                    "{} failed ({}): {}; {}",
                    file.display(),
                    e.category(),
                    e,
                    e.recovery_suggestion().unwrap_or("no suggestion")
                );
                writeln!(
                    out,
                    "Error occurred while attempting to convert {}: {}",
                    name, e
                )
                .map_err(|e| ConvertError::io("write report", e))?;
            }
        }
    }
    log::info!(
        "batch finished: {} converted, {} failed",
        summary.converted,
        summary.failed
    );
    Ok(summary)
}

/// Parse a file list: one path per line, empty lines skipped, relative
/// paths resolved against `list_dir`. Entries are taken verbatim, surrounding
/// whitespace included.
pub fn read_file_list(text: &str, list_dir: &Path) -> Vec<PathBuf> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|line| list_dir.join(line))
        .collect()
}

/// Read the list at `list_path` and convert every entry.
pub fn convert_list<S, W>(
    list_path: &Path,
    job: &Job,
    store: &S,
    out: &mut W,
) -> ConvertResult<BatchSummary>
where
    S: ImageStore + ?Sized,
    W: Write + ?Sized,
{
    let text = store
        .read_to_string(list_path)
        .map_err(|e| e.with_context("loading the batch list"))?;
    let list_dir = list_path.parent().unwrap_or_else(|| Path::new(""));
    let files = read_file_list(&text, list_dir);
    log::debug!("{} entries in {}", files.len(), list_path.display());
    convert_files(&files, job, store, out)
}
