use std::num::NonZeroUsize;

/// One contiguous page range of the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkRange {
    /// 1-based position of this chunk in the plan
    pub chunk_index: usize,
    /// First page, 0-based inclusive
    pub start_page: usize,
    /// One past the last page, 0-based exclusive
    pub end_page: usize,
    /// Number of chunks in the whole plan
    pub total_chunks: usize,
}

impl ChunkRange {
    /// Number of pages covered by this chunk
    pub fn page_len(&self) -> usize {
        self.end_page - self.start_page
    }

    /// First page as a human page number (1-based)
    pub fn first_page_number(&self) -> usize {
        self.start_page + 1
    }

    /// Last page as a human page number (1-based, inclusive)
    pub fn last_page_number(&self) -> usize {
        self.end_page
    }

    /// Whether this is the final chunk of the plan
    pub fn is_last(&self) -> bool {
        self.chunk_index == self.total_chunks
    }
}

/// Number of chunks needed to cover `page_count` pages
pub fn chunk_count(page_count: usize, pages_per_chunk: NonZeroUsize) -> usize {
    page_count.div_ceil(pages_per_chunk.get())
}

/// Plan the page ranges for splitting a document:
/// - Every chunk except the last holds exactly `pages_per_chunk` pages
/// - The last chunk holds the remainder (1..=pages_per_chunk pages)
/// - Chunks are contiguous, ordered, and together cover `[0, page_count)`
/// - An empty document yields an empty plan
pub fn plan(page_count: usize, pages_per_chunk: NonZeroUsize) -> Vec<ChunkRange> {
    let per_chunk = pages_per_chunk.get();
    let total_chunks = chunk_count(page_count, pages_per_chunk);

    (1..=total_chunks)
        .map(|chunk_index| {
            let start_page = (chunk_index - 1) * per_chunk;
            let end_page = (start_page + per_chunk).min(page_count);

            ChunkRange {
                chunk_index,
                start_page,
                end_page,
                total_chunks,
            }
        })
        .collect()
}

#[cfg(test)]
mod range_tests {
    use super::*;

    fn per(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_empty_document() {
        assert!(plan(0, per(20)).is_empty());
        assert_eq!(chunk_count(0, per(20)), 0);
    }

    #[test]
    fn test_page_numbers_are_one_based() {
        let range = ChunkRange {
            chunk_index: 2,
            start_page: 20,
            end_page: 40,
            total_chunks: 3,
        };

        assert_eq!(range.first_page_number(), 21);
        assert_eq!(range.last_page_number(), 40);
        assert_eq!(range.page_len(), 20);
        assert!(!range.is_last());
    }
}
