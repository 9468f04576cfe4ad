use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Failed to parse archive: {0}")]
    Malformed(String),

    #[error("Failed to read archive entry '{path}': {message}")]
    EntryRead { path: String, message: String },
}
