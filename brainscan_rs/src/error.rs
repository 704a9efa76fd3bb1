use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Everything that can abort a scan.
///
/// Soft-skips (unparseable tsconfig, missing brain file, missing plugin) never
/// show up here; they are treated as "not found".
#[derive(Debug, Error)]
pub enum BrainError {
    /// The configured source root does not exist. Checked before walking.
    #[error("src/ not found at {}", .0.display())]
    MissingSourceRoot(PathBuf),

    /// Stat, read or write failure on a concrete path.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize {what}: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl BrainError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for the fatal precondition that maps to exit code 1 with a
    /// dedicated diagnostic.
    pub fn is_missing_source_root(&self) -> bool {
        matches!(self, Self::MissingSourceRoot(_))
    }
}

pub type Result<T> = std::result::Result<T, BrainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_root_message_names_path() {
        let err = BrainError::MissingSourceRoot(PathBuf::from("/tmp/app/src"));
        assert!(err.is_missing_source_root());
        assert_eq!(err.to_string(), "src/ not found at /tmp/app/src");
    }

    #[test]
    fn io_error_keeps_source() {
        let err = BrainError::io(
            Path::new("src/App.vue"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_missing_source_root());
        assert!(err.to_string().contains("src/App.vue"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
