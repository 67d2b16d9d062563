mod naming;


pub use naming::chunk_file_name;

use crate::config::SplitConfig;
use crate::document::{ChunkWriter, PdfReader};
use crate::error::{Result, SplitError};
use crate::planner::{ChunkRange, plan};
use crate::report::Reporter;
use crate::scanner::{PdfFile, bytes_to_mb, list_pdfs};
use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// One chunk written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkOutput {
    pub path: PathBuf,
    pub file_name: String,
    pub range: ChunkRange,
    /// Size measured after writing
    pub size_bytes: u64,
    /// Whether `size_bytes` exceeds the configured threshold
    pub oversized: bool,
}

/// Result of a completed split
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSummary {
    pub output_dir: PathBuf,
    pub page_count: usize,
    pub pages_per_chunk: usize,
    /// Written chunks in page order
    pub chunks: Vec<ChunkOutput>,
}

impl SplitSummary {
    /// Chunks over the size threshold
    pub fn oversized(&self) -> impl Iterator<Item = &ChunkOutput> {
        self.chunks.iter().filter(|chunk| chunk.oversized)
    }

    /// Combined size of all chunks
    pub fn total_bytes(&self) -> u64 {
        self.chunks.iter().map(|chunk| chunk.size_bytes).sum()
    }
}

/// How a full run ended
#[derive(Debug)]
pub enum RunOutcome {
    /// Every chunk was written
    Split(SplitSummary),
    /// The input was absent; PDFs found next to it are listed instead
    InputMissing(Vec<PdfFile>),
    /// Splitting started but was aborted
    Failed(SplitError),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Split(_))
    }
}

/// Split the configured input into chunks of `pages_per_chunk` pages
///
/// Chunks are written in order into `output_dir`, which is created if
/// needed. A chunk over `max_size_mb` is reported and kept. The first
/// error aborts the run; chunks written before it stay on disk.
pub fn split_pdf(config: &SplitConfig, reporter: &mut dyn Reporter) -> Result<SplitSummary> {
    let result = write_chunks(config, reporter);

    match &result {
        Ok(summary) => {
            tracing::info!(
                chunks = summary.chunks.len(),
                bytes = summary.total_bytes(),
                "split complete"
            );
            reporter.finished(summary);
        }
        Err(e) => {
            tracing::debug!(error = %e, input = %config.input.display(), "split failed");
            reporter.failed(e);
        }
    }

    result
}

/// Like `split_pdf`, reporting only whether every chunk was written
pub fn split(config: &SplitConfig, reporter: &mut dyn Reporter) -> bool {
    split_pdf(config, reporter).is_ok()
}

/// Full command flow: check the input, list alternatives if it is
/// missing, otherwise split it
pub fn run(config: &SplitConfig, reporter: &mut dyn Reporter) -> RunOutcome {
    if !config.input.exists() {
        let search_dir = config.search_dir();
        let candidates = list_pdfs(search_dir).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not list PDF files");
            Vec::new()
        });
        reporter.input_missing(&config.input, search_dir, &candidates);
        return RunOutcome::InputMissing(candidates);
    }

    let size_bytes = fs::metadata(&config.input).map(|m| m.len()).unwrap_or(0);
    reporter.input_found(&PdfFile {
        path: config.input.clone(),
        name: config
            .input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        size_bytes,
    });

    match split_pdf(config, reporter) {
        Ok(summary) => RunOutcome::Split(summary),
        Err(e) => RunOutcome::Failed(e),
    }
}

fn write_chunks(config: &SplitConfig, reporter: &mut dyn Reporter) -> Result<SplitSummary> {
    let pages_per_chunk =
        NonZeroUsize::new(config.pages_per_chunk).ok_or(SplitError::InvalidPagesPerChunk)?;

    if !config.input.exists() {
        return Err(SplitError::NotFound(config.input.clone()));
    }

    fs::create_dir_all(&config.output_dir).map_err(|source| SplitError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    reporter.reading(&config.input);
    let reader = PdfReader::open(&config.input)?;
    let page_count = reader.page_count();

    let ranges = plan(page_count, pages_per_chunk);
    reporter.planned(page_count, ranges.len(), pages_per_chunk.get());
    tracing::info!(
        input = %config.input.display(),
        pages = page_count,
        chunks = ranges.len(),
        "planned split"
    );

    let mut chunks = Vec::with_capacity(ranges.len());

    for range in ranges {
        let mut writer = ChunkWriter::new(&reader);
        for index in range.start_page..range.end_page {
            writer.add_page(index)?;
        }

        let file_name = chunk_file_name(&config.input, &range);
        let path = config.output_dir.join(&file_name);
        let size_bytes = writer.write(&path)?;

        let oversized = bytes_to_mb(size_bytes) > config.max_size_mb;
        if oversized {
            tracing::debug!(
                file = %file_name,
                bytes = size_bytes,
                max_mb = config.max_size_mb,
                "chunk exceeds size limit"
            );
        }

        let chunk = ChunkOutput {
            path,
            file_name,
            range,
            size_bytes,
            oversized,
        };
        reporter.chunk_written(&chunk, config.max_size_mb);
        chunks.push(chunk);
    }

    Ok(SplitSummary {
        output_dir: config.output_dir.clone(),
        page_count,
        pages_per_chunk: pages_per_chunk.get(),
        chunks,
    })
}
