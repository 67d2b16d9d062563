use crate::planner::DEFAULT_PAGES_PER_CHUNK;
use std::path::{Path, PathBuf};

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Advisory size limit per chunk, in MB
pub const DEFAULT_MAX_SIZE_MB: f64 = 8.0;

/// Directory under the home directory searched for input
pub const DOWNLOADS_DIR: &str = "Downloads";

/// Input file name looked for in the downloads directory
pub const DEFAULT_INPUT_FILE: &str = "samling_av_pdf.pdf";

/// Output directory name created next to the input
pub const DEFAULT_OUTPUT_DIR: &str = "gulmaran_pdf_delar";

/// Everything one split run needs
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Validated when the split starts; 0 is rejected there
    pub pages_per_chunk: usize,
    /// Chunks larger than this are reported, never rejected
    pub max_size_mb: f64,
}

impl SplitConfig {
    /// Create a config with default chunking limits
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            pages_per_chunk: DEFAULT_PAGES_PER_CHUNK,
            max_size_mb: DEFAULT_MAX_SIZE_MB,
        }
    }

    /// Default locations relative to a home directory:
    /// `~/Downloads/samling_av_pdf.pdf` into `~/Downloads/gulmaran_pdf_delar`
    pub fn from_home(home: &Path) -> Self {
        let downloads = home.join(DOWNLOADS_DIR);
        Self::new(
            downloads.join(DEFAULT_INPUT_FILE),
            downloads.join(DEFAULT_OUTPUT_DIR),
        )
    }

    /// Set pages per chunk
    pub fn pages_per_chunk(mut self, pages: usize) -> Self {
        self.pages_per_chunk = pages;
        self
    }

    /// Set the advisory size threshold
    pub fn max_size_mb(mut self, size_mb: f64) -> Self {
        self.max_size_mb = size_mb;
        self
    }

    /// Directory holding the input file, searched when the input is missing
    pub fn search_dir(&self) -> &Path {
        self.input
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}
