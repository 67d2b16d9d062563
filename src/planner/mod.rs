mod range;


pub use range::{ChunkRange, chunk_count, plan};

/// Pages per chunk when nothing else is configured
pub const DEFAULT_PAGES_PER_CHUNK: usize = 20;
