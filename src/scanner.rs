use crate::error::{Result, SplitError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A PDF found on disk
#[derive(Debug, Clone, PartialEq)]
pub struct PdfFile {
    pub path: PathBuf,
    /// File name including extension
    pub name: String,
    pub size_bytes: u64,
}

impl PdfFile {
    pub fn size_mb(&self) -> f64 {
        bytes_to_mb(self.size_bytes)
    }
}

/// Convert a byte count to mebibytes
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Check whether a path matches `*.pdf` (lower-case extension, as a glob would)
pub fn is_pdf(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "pdf")
}

/// List the PDFs directly inside `dir`, sorted by name
///
/// Subdirectories are not descended into. A directory that does not
/// exist yields an empty list.
pub fn list_pdfs(dir: &Path) -> Result<Vec<PdfFile>> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "scan directory missing");
        return Ok(Vec::new());
    }

    let mut found = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| SplitError::Scan {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        let path = entry.path();

        if !entry.file_type().is_file() || !is_pdf(path) {
            continue;
        }

        let size_bytes = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };

        found.push(PdfFile {
            path: path.to_path_buf(),
            name: entry.file_name().to_string_lossy().into_owned(),
            size_bytes,
        });
    }

    tracing::debug!(dir = %dir.display(), count = found.len(), "scanned for PDFs");
    Ok(found)
}
