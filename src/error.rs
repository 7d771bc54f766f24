use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing or running a word search.
#[derive(Error, Debug)]
pub enum WordSearchError {
    /// The dictionary file yielded no words.
    #[error("No words in dictionary {path:?}, need a dictionary with at least 1 word")]
    EmptyDictionary { path: PathBuf },

    /// An axis size was not a positive integer.
    #[error("Invalid {axis} size {value:?}: expected an integer > 0")]
    InvalidDimension { axis: &'static str, value: String },

    /// The dictionary path does not point at an existing file.
    #[error("Could not find dictionary file {path:?}")]
    MissingFile { path: PathBuf },

    #[error("Failed to read dictionary {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, WordSearchError>;
