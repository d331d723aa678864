use std::error::Error;
use std::fmt;

/// Error raised when an image asset cannot be located on disk.
///
/// Carries the filename that was searched for, never the logical key, so the
/// caller can name the missing file in its diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    NotFound(String), // Requested filename
}

impl AssetError {
    pub fn requested_name(&self) -> &str {
        match self {
            AssetError::NotFound(name) => name,
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssetError::NotFound(name) => write!(f, "Asset not found: {}", name),
        }
    }
}

impl Error for AssetError {}
