mod collection;
mod disk;
mod memory;

#[cfg(test)]
mod tests;

pub use collection::FileCollection;
pub use disk::DiskFile;
pub use memory::MemoryFile;

use async_trait::async_trait;

/// Platform file-reader seam: anything with a name whose full contents can
/// be read asynchronously
///
/// Reads are whole-file; a handle is free to be re-read, and every call
/// returns a fresh buffer.
#[async_trait]
pub trait FileHandle: Send + Sync {
    /// Filename as the user supplied it (no path normalization)
    fn name(&self) -> &str;

    /// Read the complete file contents
    async fn read_bytes(&self) -> std::io::Result<Vec<u8>>;
}
