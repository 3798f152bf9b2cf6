//! Output file naming.

use std::path::{Path, PathBuf};

/// Output path next to `input`: `{stem}{suffix}.{ext}`.
///
/// Outputs are always JPEG, so the input extension is kept only when it
/// already is one (`jpg`/`jpeg`, any case); otherwise `jpg` is used.
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = match input.extension().and_then(|e| e.to_str()) {
        Some(e) if e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg") => e,
        _ => "jpg",
    };
    input.with_file_name(format!("{stem}{suffix}.{ext}"))
}

/// File name for console messages, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
