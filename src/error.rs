use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FenceStripError {
    #[error("IO operation failed on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File is not valid UTF-8: {}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization failed: {message}")]
    Serialization { message: String },
}

impl FenceStripError {
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        FenceStripError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Kind of the underlying IO error, if this is one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            FenceStripError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    /// Process exit code reported by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            FenceStripError::Io { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => 3,
                io::ErrorKind::PermissionDenied => 4,
                _ => 1,
            },
            FenceStripError::Encoding { .. } => 5,
            FenceStripError::Config { .. } => 6,
            FenceStripError::Serialization { .. } => 1,
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for FenceStripError {
    fn user_message(&self) -> String {
        match self {
            FenceStripError::Io { path, source } => match source.kind() {
                io::ErrorKind::NotFound => format!("File not found: {}", path.display()),
                io::ErrorKind::PermissionDenied => {
                    format!("Permission denied accessing: {}", path.display())
                }
                _ => format!("Failed to access {}: {}", path.display(), source),
            },
            FenceStripError::Encoding { path, .. } => {
                format!("File is not valid UTF-8: {}", path.display())
            }
            FenceStripError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            FenceStripError::Serialization { .. } => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            FenceStripError::Io { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => Some(
                    "Check that the component directory exists on this machine. Files after this one were not processed.".to_string()
                ),
                io::ErrorKind::PermissionDenied => Some(
                    "Ensure you have read/write permissions on the component files.".to_string()
                ),
                _ => None,
            },
            FenceStripError::Encoding { .. } => Some(
                "Re-save the file as UTF-8 and run the cleanup again.".to_string()
            ),
            FenceStripError::Config { .. } => Some(
                "The target list is compiled in; fix it in src/config.rs and rebuild.".to_string()
            ),
            FenceStripError::Serialization { .. } => None,
        }
    }
}

impl From<toml::ser::Error> for FenceStripError {
    fn from(error: toml::ser::Error) -> Self {
        FenceStripError::Serialization {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for FenceStripError {
    fn from(error: serde_json::Error) -> Self {
        FenceStripError::Serialization {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FenceStripError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = FenceStripError::io(
            "ui/card.jsx",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(error.user_message().contains("File not found"));
        assert!(error.user_message().contains("card.jsx"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_exit_codes() {
        let not_found = FenceStripError::io("a", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(not_found.exit_code(), 3);

        let denied = FenceStripError::io("a", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(denied.exit_code(), 4);

        let other = FenceStripError::io("a", io::Error::from(io::ErrorKind::Other));
        assert_eq!(other.exit_code(), 1);

        let encoding = FenceStripError::Encoding {
            path: PathBuf::from("a"),
            source: String::from_utf8(vec![0xff]).unwrap_err(),
        };
        assert_eq!(encoding.exit_code(), 5);

        let config = FenceStripError::Config {
            message: "empty".to_string(),
        };
        assert_eq!(config.exit_code(), 6);
    }

    #[test]
    fn test_io_kind() {
        let error = FenceStripError::io("a", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(error.io_kind(), Some(io::ErrorKind::NotFound));

        let config = FenceStripError::Config {
            message: "x".to_string(),
        };
        assert_eq!(config.io_kind(), None);
    }
}
