use super::Reporter;
use crate::error::SplitError;
use crate::scanner::PdfFile;
use crate::splitter::{ChunkOutput, SplitSummary};
use std::path::{Path, PathBuf};

/// Event captured by `RecordingReporter`
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    InputFound(String),
    InputMissing {
        input: PathBuf,
        search_dir: PathBuf,
        candidates: Vec<String>,
    },
    Reading(PathBuf),
    Planned { page_count: usize, total_chunks: usize },
    ChunkWritten { file_name: String, oversized: bool },
    Finished(usize),
    Failed(String),
}

/// Keeps every event for inspection in tests
#[derive(Debug, Default)]
pub(crate) struct RecordingReporter {
    pub events: Vec<Event>,
}

impl RecordingReporter {
    pub fn warnings(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::ChunkWritten { oversized: true, .. }))
            .count()
    }

    pub fn written(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::ChunkWritten { file_name, .. } => Some(file_name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn input_found(&mut self, input: &PdfFile) {
        self.events.push(Event::InputFound(input.name.clone()));
    }

    fn input_missing(&mut self, input: &Path, search_dir: &Path, candidates: &[PdfFile]) {
        self.events.push(Event::InputMissing {
            input: input.to_path_buf(),
            search_dir: search_dir.to_path_buf(),
            candidates: candidates.iter().map(|c| c.name.clone()).collect(),
        });
    }

    fn reading(&mut self, input: &Path) {
        self.events.push(Event::Reading(input.to_path_buf()));
    }

    fn planned(&mut self, page_count: usize, total_chunks: usize, _pages_per_chunk: usize) {
        self.events.push(Event::Planned {
            page_count,
            total_chunks,
        });
    }

    fn chunk_written(&mut self, chunk: &ChunkOutput, _max_size_mb: f64) {
        self.events.push(Event::ChunkWritten {
            file_name: chunk.file_name.clone(),
            oversized: chunk.oversized,
        });
    }

    fn finished(&mut self, summary: &SplitSummary) {
        self.events.push(Event::Finished(summary.chunks.len()));
    }

    fn failed(&mut self, error: &SplitError) {
        self.events.push(Event::Failed(error.to_string()));
    }
}
