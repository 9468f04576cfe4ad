mod error;
mod zip_decoder;


pub use error::ArchiveError;
pub use zip_decoder::ZipDecoder;

/// One non-directory entry pulled out of an archive
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    /// Relative path of the entry as stored in the archive
    pub path: String,
    /// Raw entry bytes, fully inflated
    pub bytes: Vec<u8>,
}

impl ArchiveEntry {
    /// Decode the entry bytes as text (lossy UTF-8, no encoding detection)
    pub fn read_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Archive-decoding seam: load a byte blob as a navigable archive and
/// enumerate its entries
///
/// Implementations return entries in the archive's own iteration order and
/// skip directory entries. Decoding is synchronous CPU work; callers that
/// run on an async runtime push it onto the blocking pool.
pub trait ArchiveDecoder: Send + Sync {
    /// Inflate every non-directory entry of the archive held in `bytes`
    fn open(&self, bytes: &[u8]) -> Result<Vec<ArchiveEntry>, ArchiveError>;
}
