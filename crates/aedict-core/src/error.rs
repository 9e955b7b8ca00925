#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Dictionary not installed: {0}")]
    NotInstalled(String),

    #[error("Dictionary lookup already closed")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Analysis failed: {0}")]
    Lookup(#[from] LookupError),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<LoadError> for LookupError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::FileNotFound(path) => LookupError::NotInstalled(path),
            LoadError::IoError(e) => LookupError::Io(e),
            other => LookupError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                other.to_string(),
            )),
        }
    }
}
