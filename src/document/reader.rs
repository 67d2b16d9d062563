use crate::error::{Result, SplitError};
use lopdf::{Document, ObjectId};
use std::path::{Path, PathBuf};

/// Read-only view of a source PDF
///
/// Pages are addressed by 0-based index in document order.
pub struct PdfReader {
    path: PathBuf,
    document: Document,
    /// Page objects in page order
    pages: Vec<ObjectId>,
}

impl PdfReader {
    /// Open and parse a PDF from disk
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = Document::load(path).map_err(|e| SplitError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        // get_pages is keyed by page number, so values come out in page order
        let pages: Vec<ObjectId> = document.get_pages().into_values().collect();

        tracing::debug!(path = %path.display(), pages = pages.len(), "opened source PDF");

        Ok(Self {
            path: path.to_path_buf(),
            document,
            pages,
        })
    }

    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page object for a 0-based page index
    pub fn page(&self, index: usize) -> Option<ObjectId> {
        self.pages.get(index).copied()
    }

    /// Path the document was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }
}
