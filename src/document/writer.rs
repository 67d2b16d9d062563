use super::PdfReader;
use crate::error::{Result, SplitError};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Page attributes a page may inherit from its ancestors in the page tree
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against cyclic `/Parent` chains in malformed files
const MAX_TREE_DEPTH: usize = 64;

/// Collects pages of a source document into a new, standalone PDF
///
/// Only the added pages and the objects they reference are copied, so
/// building a chunk costs time proportional to the chunk, not the source.
/// The source is never mutated.
pub struct ChunkWriter<'a> {
    source: &'a PdfReader,
    pages: Vec<ObjectId>,
}

impl<'a> ChunkWriter<'a> {
    /// Start an empty chunk backed by `source`
    pub fn new(source: &'a PdfReader) -> Self {
        Self {
            source,
            pages: Vec::new(),
        }
    }

    /// Add the page at a 0-based index of the source
    ///
    /// Pages appear in the chunk in the order they are added.
    pub fn add_page(&mut self, index: usize) -> Result<()> {
        let page_id = self.source.page(index).ok_or(SplitError::PageOutOfRange {
            index,
            page_count: self.source.page_count(),
        })?;
        if !self.pages.contains(&page_id) {
            self.pages.push(page_id);
        }
        Ok(())
    }

    /// Number of pages added so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize the chunk to `path`, returning the written size in bytes
    ///
    /// An existing file at `path` is overwritten.
    pub fn write(&self, path: &Path) -> Result<u64> {
        let write_err = |reason: String| SplitError::Write {
            path: path.to_path_buf(),
            reason,
        };

        let mut document = self.build()?;

        let file = File::create(path).map_err(|e| write_err(e.to_string()))?;
        let mut out = BufWriter::new(file);
        document
            .save_to(&mut out)
            .map_err(|e| write_err(e.to_string()))?;
        out.flush().map_err(|e| write_err(e.to_string()))?;

        let size = fs::metadata(path)
            .map_err(|e| write_err(e.to_string()))?
            .len();

        tracing::debug!(
            path = %path.display(),
            pages = self.pages.len(),
            objects = document.objects.len(),
            bytes = size,
            "wrote chunk"
        );

        Ok(size)
    }

    /// Assemble a fresh document holding only the added pages
    ///
    /// Object ids are kept from the source; the new page tree and catalog
    /// get ids above the source's highest.
    fn build(&self) -> Result<Document> {
        let source = self.source.document();
        let mut document = Document::with_version(source.version.clone());
        document.max_id = source.max_id;

        let pages_id = document.new_object_id();
        let wanted: HashSet<ObjectId> = self.pages.iter().copied().collect();
        let mut pending = Vec::new();

        for &page_id in &self.pages {
            let mut page = self.flatten_page(page_id)?;
            for (_, value) in page.iter() {
                collect_references(value, &mut pending);
            }
            page.set("Parent", Object::Reference(pages_id));
            document.objects.insert(page_id, Object::Dictionary(page));
        }

        // Copy everything the pages reach, stopping at page tree nodes
        // that belong to other chunks
        while let Some(id) = pending.pop() {
            if document.objects.contains_key(&id) {
                continue;
            }
            let Ok(object) = source.get_object(id) else {
                continue;
            };
            if is_page_tree_node(object) && !wanted.contains(&id) {
                continue;
            }
            collect_references(object, &mut pending);
            document.objects.insert(id, object.clone());
        }

        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(self.pages.len() as i64)),
            (
                "Kids",
                Object::Array(self.pages.iter().map(|id| Object::Reference(*id)).collect()),
            ),
        ]);
        document.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]);
        let catalog_id = document.add_object(catalog);
        document.trailer.set("Root", Object::Reference(catalog_id));

        Ok(document)
    }

    /// Copy of a page dictionary with inherited attributes made explicit
    /// and its `/Parent` link removed
    fn flatten_page(&self, page_id: ObjectId) -> Result<Dictionary> {
        let source = self.source.document();
        let mut page = source
            .get_dictionary(page_id)
            .map_err(|e| SplitError::Parse {
                path: self.source.path().to_path_buf(),
                reason: format!("page object {:?}: {}", page_id, e),
            })?
            .clone();

        let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
        let mut depth = 0;

        while let Some(node_id) = parent {
            if depth == MAX_TREE_DEPTH {
                break;
            }
            let Ok(node) = source.get_dictionary(node_id) else {
                break;
            };
            for key in INHERITABLE {
                if !page.has(key) {
                    if let Ok(value) = node.get(key) {
                        page.set(key.to_vec(), value.clone());
                    }
                }
            }
            parent = node.get(b"Parent").and_then(Object::as_reference).ok();
            depth += 1;
        }

        page.remove(b"Parent");
        Ok(page)
    }
}

fn is_page_tree_node(object: &Object) -> bool {
    matches!(object.type_name(), Ok(b"Page" | b"Pages" | b"Catalog"))
}

/// Push every indirect reference found inside `object`
fn collect_references(object: &Object, pending: &mut Vec<ObjectId>) {
    match object {
        Object::Reference(id) => pending.push(*id),
        Object::Array(items) => {
            for item in items {
                collect_references(item, pending);
            }
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter() {
                collect_references(value, pending);
            }
        }
        Object::Stream(stream) => {
            for (_, value) in stream.dict.iter() {
                collect_references(value, pending);
            }
        }
        _ => {}
    }
}
