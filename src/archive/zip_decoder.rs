use super::{ArchiveDecoder, ArchiveEntry, ArchiveError};
use std::io::{Cursor, Read};

/// Stock decoder for zip archives, fully in-memory
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipDecoder;

impl ZipDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveDecoder for ZipDecoder {
    fn open(&self, bytes: &[u8]) -> Result<Vec<ArchiveEntry>, ArchiveError> {
        let cursor = Cursor::new(bytes);
        let mut archive =
            zip::ZipArchive::new(cursor).map_err(|e| ArchiveError::Malformed(e.to_string()))?;

        let mut entries = Vec::with_capacity(archive.len());

        for i in 0..archive.len() {
            let mut file = archive
                .by_index(i)
                .map_err(|e| ArchiveError::Malformed(e.to_string()))?;

            if file.is_dir() {
                continue;
            }

            let path = file.name().to_string();

            let mut bytes = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut bytes)
                .map_err(|e| ArchiveError::EntryRead {
                    path: path.clone(),
                    message: e.to_string(),
                })?;

            entries.push(ArchiveEntry { path, bytes });
        }

        Ok(entries)
    }
}
