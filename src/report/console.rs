use super::Reporter;
use crate::error::SplitError;
use crate::scanner::{PdfFile, bytes_to_mb};
use crate::splitter::{ChunkOutput, SplitSummary};
use std::io::{self, Stdout, Write};
use std::path::Path;

/// Human-readable progress output
pub struct ConsoleReporter<W: Write = Stdout> {
    out: W,
}

impl ConsoleReporter<Stdout> {
    /// Report to standard output
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Report into any writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        // Console output is best effort
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!(error = %e, "failed to write report line");
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn input_found(&mut self, input: &PdfFile) {
        self.line(format_args!("Found file:  {}", input.name));
        self.line(format_args!("File size:   {:.1}MB\n", input.size_mb()));
    }

    fn input_missing(&mut self, input: &Path, search_dir: &Path, candidates: &[PdfFile]) {
        self.line(format_args!("✗ File not found: {}", input.display()));

        self.line(format_args!(
            "\nLooking for PDF files in {}...",
            search_dir.display()
        ));

        if candidates.is_empty() {
            self.line(format_args!("✗ No PDF files found in {}", search_dir.display()));
            return;
        }

        self.line(format_args!("\nFound these PDF files:"));
        for (i, pdf) in candidates.iter().enumerate() {
            self.line(format_args!("{}. {} ({:.1}MB)", i + 1, pdf.name, pdf.size_mb()));
        }

        let wanted = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.line(format_args!(
            "\nRename your file to '{}' or pass --input <PATH>",
            wanted
        ));
    }

    fn reading(&mut self, input: &Path) {
        let name = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());
        self.line(format_args!("Reading PDF: {}", name));
    }

    fn planned(&mut self, page_count: usize, total_chunks: usize, pages_per_chunk: usize) {
        self.line(format_args!("Total pages: {}", page_count));
        self.line(format_args!(
            "Splitting into {} parts ({} pages per part)\n",
            total_chunks, pages_per_chunk
        ));
    }

    fn chunk_written(&mut self, chunk: &ChunkOutput, max_size_mb: f64) {
        let size_mb = bytes_to_mb(chunk.size_bytes);
        if chunk.oversized {
            self.line(format_args!(
                "  ⚠ {}: {:.1}MB (over {}MB limit)",
                chunk.file_name, size_mb, max_size_mb
            ));
        } else {
            self.line(format_args!("  ✓ {}: {:.1}MB", chunk.file_name, size_mb));
        }
    }

    fn finished(&mut self, summary: &SplitSummary) {
        let total = summary.chunks.len();
        self.line(format_args!(
            "\n✓ Done! {} parts created in: {}",
            total,
            summary.output_dir.display()
        ));

        let oversized = summary.oversized().count();
        if oversized > 0 {
            self.line(format_args!(
                "⚠ {} of {} parts exceed the size limit; try fewer pages per part",
                oversized, total
            ));
        }

        self.line(format_args!("\nNext steps:"));
        self.line(format_args!("1. Go to {}", summary.output_dir.display()));
        self.line(format_args!("2. Upload each part separately"));
        self.line(format_args!(
            "3. Give descriptive titles (e.g. 'Protokoll Del 1 av {}')",
            total
        ));
    }

    fn failed(&mut self, error: &SplitError) {
        self.line(format_args!("\n✗ Error while processing: {}", error));
    }
}
