use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for resource loading.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// The resource file does not exist.
    #[error("Resource not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The resource file exists but could not be read.
    #[error("Failed to read resource {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads the full contents of a resource file into a string.
/// Synchronous and blocking; no streaming or partial reads.
///
/// # Errors
/// Returns `ResourceError::NotFound` if the file does not exist, and
/// `ResourceError::Unreadable` for any other read failure.
pub fn read_resource(path: impl AsRef<Path>) -> Result<String, ResourceError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ResourceError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ResourceError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
