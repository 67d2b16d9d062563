mod reader;
mod writer;

#[cfg(test)]
pub(crate) mod fixture;


pub use reader::PdfReader;
pub use writer::ChunkWriter;
