use crate::archive::ArchiveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Parameter {name} is not as expected: {message}")]
    Parameter {
        name: &'static str,
        message: String,
    },

    #[error("{name} is not a zip file")]
    NotAnArchive { name: String },

    #[error("Failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Archive decoder is not configured")]
    MissingDecoder,

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}
