//! Error types for the notebook store and the CLI around it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading, mutating or saving a notebook.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// The requested id is outside `1..=count`. Signed so that ids typed
    /// as `-1` are reported back verbatim.
    #[error("Note ({0}) not found.")]
    NotFound(i64),

    /// The notebook file exists but does not have the expected shape.
    #[error("Notebook file {} is corrupt: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The notebook file exists but could not be read.
    #[error("Could not read notebook {}: {source}", .path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the notebook back to disk failed.
    #[error("Could not write notebook {}: {source}", .path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The in-memory notebook could not be serialized.
    #[error("Could not encode notebook: {0}")]
    Encode(#[from] serde_json::Error),

    /// Terminal or environment I/O outside the notebook file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias that pins the error type to [`NotebookError`].
pub type Result<T> = std::result::Result<T, NotebookError>;

impl NotebookError {
    /// Whether the invocation has to stop with a non-zero exit status.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }

    /// Short message suitable for the terminal.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => self.to_string(),
            Self::CorruptStore { path, .. } => format!(
                "The notebook at {} could not be parsed; fix or move it and try again.",
                path.display()
            ),
            Self::StorageRead { path, source } => {
                format!("Could not read {}: {source}", path.display())
            }
            Self::StorageWrite { path, source } => {
                format!("Could not save {}: {source}", path.display())
            }
            Self::Encode(e) => format!("Data format error: {e}"),
            Self::Io(e) => format!("File error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_matches_cli_wording() {
        let e = NotebookError::NotFound(4);
        assert_eq!(e.to_string(), "Note (4) not found.");
        assert_eq!(e.user_message(), "Note (4) not found.");
        assert!(!e.is_fatal());
    }

    #[test]
    fn negative_ids_are_reported_verbatim() {
        assert_eq!(NotebookError::NotFound(-1).to_string(), "Note (-1) not found.");
    }

    #[test]
    fn storage_errors_are_fatal() {
        let e = NotebookError::StorageWrite {
            path: PathBuf::from("/tmp/notes.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.is_fatal());
        assert!(e.user_message().contains("/tmp/notes.json"));
        assert!(e.to_string().contains("denied"));
    }

    #[test]
    fn corrupt_store_names_the_file() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = NotebookError::CorruptStore { path: PathBuf::from("notes.json"), source };
        assert!(e.is_fatal());
        assert!(e.to_string().starts_with("Notebook file notes.json is corrupt"));
    }
}
