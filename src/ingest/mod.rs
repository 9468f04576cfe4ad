mod error;


pub use error::IngestError;

use crate::archive::{ArchiveDecoder, ArchiveError, ZipDecoder};
use crate::handle::{FileCollection, FileHandle};
use crate::record::{FileRecord, Nested, RecordSet};
use futures::future::try_join_all;
use std::sync::Arc;

/// Anchored, case-sensitive suffix that routes a handle to the archive path
const ZIP_SUFFIX: &str = ".zip";

/// Asynchronous file ingestor
///
/// Normalizes three input shapes into text records: a collection of files,
/// a single archive, a single plain file. Archive expansion produces a
/// nested group per archive; `RecordSet::simplify` flattens the mix into
/// one sequence. Every batch joins with fail-fast semantics: the first
/// failure rejects the whole operation and no partial results are returned.
pub struct FileIngestor {
    decoder: Arc<dyn ArchiveDecoder>,
}

impl std::fmt::Debug for FileIngestor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileIngestor").finish_non_exhaustive()
    }
}

/// Builder injecting the archive-decoder capability explicitly
///
/// A missing decoder is a construction-time configuration error, not a
/// silently degraded ingestor.
#[derive(Default)]
pub struct IngestorBuilder {
    decoder: Option<Arc<dyn ArchiveDecoder>>,
}

impl IngestorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the archive decoder implementation
    pub fn decoder(mut self, decoder: impl ArchiveDecoder + 'static) -> Self {
        self.decoder = Some(Arc::new(decoder));
        self
    }

    /// Finish construction; fails fast when no decoder was supplied
    pub fn build(self) -> Result<FileIngestor, IngestError> {
        match self.decoder {
            Some(decoder) => Ok(FileIngestor { decoder }),
            None => {
                tracing::error!(
                    "archive decoder capability missing: ingestor cannot be constructed"
                );
                Err(IngestError::MissingDecoder)
            }
        }
    }
}

impl FileIngestor {
    /// Ingestor with the stock zip decoder
    pub fn with_zip() -> Self {
        Self {
            decoder: Arc::new(ZipDecoder::new()),
        }
    }

    pub fn builder() -> IngestorBuilder {
        IngestorBuilder::new()
    }

    /// Ingest a whole collection: archives expand into nested groups, plain
    /// files become single leaves
    ///
    /// The collection is validated synchronously before any read starts.
    /// All per-file reads launch together; the join rejects on the first
    /// failure.
    pub async fn ingest_collection(
        &self,
        files: &FileCollection,
    ) -> Result<RecordSet<FileRecord>, IngestError> {
        validate_collection(files)?;

        tracing::debug!(files = files.len(), "ingesting collection");

        let tasks = files.iter().map(|handle| {
            let handle = Arc::clone(handle);
            async move {
                if is_archive_name(handle.name()) {
                    let records = self.ingest_archive(handle.as_ref()).await?;
                    Ok(Nested::from(records))
                } else {
                    self.ingest_file(handle.as_ref()).await.map(Nested::Leaf)
                }
            }
        });

        let elements = try_join_all(tasks).await?;
        Ok(RecordSet::from(elements))
    }

    /// Ingest a single archive handle, one record per entry
    ///
    /// The filename must carry the `.zip` suffix; anything else is rejected
    /// before the file is read.
    pub async fn ingest_archive(
        &self,
        file: &dyn FileHandle,
    ) -> Result<Vec<FileRecord>, IngestError> {
        let name = file.name().to_string();
        if !is_archive_name(&name) {
            tracing::warn!(file = %name, "not an archive, refusing to decode");
            return Err(IngestError::NotAnArchive { name });
        }

        let bytes = read_handle(file).await?;
        tracing::debug!(file = %name, bytes = bytes.len(), "decoding archive");

        // Inflation is CPU work; keep it off the async threads
        let decoder = Arc::clone(&self.decoder);
        let entries = tokio::task::spawn_blocking(move || decoder.open(&bytes))
            .await
            .map_err(|e| ArchiveError::Malformed(format!("decoder task failed: {e}")))??;

        let tasks = entries.into_iter().map(|entry| async move {
            let content = entry.read_text();
            Ok::<_, IngestError>(FileRecord::new(entry.path, content))
        });
        let records = try_join_all(tasks).await?;

        tracing::debug!(file = %name, records = records.len(), "archive expanded");
        Ok(records)
    }

    /// Ingest one plain file: whole-file read, lossy UTF-8 text decode
    pub async fn ingest_file(&self, file: &dyn FileHandle) -> Result<FileRecord, IngestError> {
        let bytes = read_handle(file).await?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        Ok(FileRecord::new(file.name(), content))
    }
}

/// Pre-I/O validation of a collection; a handle with no name is malformed
fn validate_collection(files: &FileCollection) -> Result<(), IngestError> {
    for handle in files.iter() {
        if handle.name().is_empty() {
            return Err(IngestError::Parameter {
                name: "files",
                message: "collection contains a handle with an empty name".to_string(),
            });
        }
    }
    Ok(())
}

fn is_archive_name(name: &str) -> bool {
    name.ends_with(ZIP_SUFFIX)
}

async fn read_handle(file: &dyn FileHandle) -> Result<Vec<u8>, IngestError> {
    file.read_bytes().await.map_err(|source| IngestError::Read {
        name: file.name().to_string(),
        source,
    })
}
