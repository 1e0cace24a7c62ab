use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize page {page}: {source}")]
    Serialize {
        page: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Errors that only spoil the current page; the batch carries on.
    pub fn is_page_local(&self) -> bool {
        matches!(self, Error::ReadInput { .. } | Error::Serialize { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
