mod console;

#[cfg(test)]
pub(crate) mod recording;

pub use console::ConsoleReporter;

use crate::error::SplitError;
use crate::scanner::PdfFile;
use crate::splitter::{ChunkOutput, SplitSummary};
use std::path::Path;

/// Receives progress events from a split run
///
/// Implementations decide how (and whether) to present them.
pub trait Reporter {
    /// The input exists and is about to be split
    fn input_found(&mut self, input: &PdfFile);

    /// The input does not exist; `candidates` are the PDFs in `search_dir`
    fn input_missing(&mut self, input: &Path, search_dir: &Path, candidates: &[PdfFile]);

    /// Parsing of the source has started
    fn reading(&mut self, input: &Path);

    /// The source was parsed and a chunk plan computed
    fn planned(&mut self, page_count: usize, total_chunks: usize, pages_per_chunk: usize);

    /// One chunk was written to disk
    fn chunk_written(&mut self, chunk: &ChunkOutput, max_size_mb: f64);

    /// Every chunk was written
    fn finished(&mut self, summary: &SplitSummary);

    /// The run was aborted
    fn failed(&mut self, error: &SplitError);
}
