use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading catalog data from disk.
///
/// A missing data file is not an error (it yields an empty collection);
/// only an unreadable or malformed file surfaces here.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
