// Public API exports
pub mod archive;
pub mod handle;
pub mod ingest;
pub mod record;

// Re-export main types for convenience
pub use archive::{ArchiveDecoder, ArchiveEntry, ArchiveError, ZipDecoder};
pub use handle::{DiskFile, FileCollection, FileHandle, MemoryFile};
pub use ingest::{FileIngestor, IngestError, IngestorBuilder};
pub use record::{FileRecord, Nested, RecordSet};
