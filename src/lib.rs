// Public API exports
pub mod config;
pub mod document;
pub mod error;
pub mod planner;
pub mod report;
pub mod scanner;
pub mod splitter;

// Re-export main types for convenience
pub use config::{
    DEFAULT_INPUT_FILE, DEFAULT_LOG_FILTER, DEFAULT_MAX_SIZE_MB, DEFAULT_OUTPUT_DIR,
    DOWNLOADS_DIR, SplitConfig,
};
pub use error::{Result, SplitError};

pub use planner::{ChunkRange, DEFAULT_PAGES_PER_CHUNK, chunk_count, plan};

pub use document::{ChunkWriter, PdfReader};

pub use scanner::{PdfFile, list_pdfs};

pub use report::{ConsoleReporter, Reporter};

pub use splitter::{
    ChunkOutput, RunOutcome, SplitSummary, chunk_file_name, run, split, split_pdf,
};
