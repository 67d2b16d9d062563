use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Pages per chunk must be at least 1")]
    InvalidPagesPerChunk,

    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse PDF {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Page index {index} out of range (document has {page_count} pages)")]
    PageOutOfRange { index: usize, page_count: usize },

    #[error("Failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    #[error("Failed to scan {}: {reason}", .path.display())]
    Scan { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, SplitError>;
