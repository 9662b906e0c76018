use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadingError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    WalkDir(#[from] async_walkdir::Error),
    #[error("Invalid Path: {0}")]
    InvalidPath(PathBuf),
    #[error("Failed to parse {key}: {source}")]
    Parse {
        key: String,
        #[source]
        source: ParseError,
    },
}

impl LoadingError {
    pub fn parse(key: impl Into<String>, source: impl Into<ParseError>) -> Self {
        LoadingError::Parse {
            key: key.into(),
            source: source.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Yaml(#[from] serde_yml::Error),
}
