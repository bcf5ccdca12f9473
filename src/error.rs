use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum RepocatError {
    #[error("The specified path is not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
impl RepocatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepocatError::Io {
            path: path.into(),
            source,
        }
    }
}
