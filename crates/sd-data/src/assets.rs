//! Static assets embedded in the dashboard chrome

use std::path::Path;

use crate::DataError;

/// Read the support badge image into memory, fully buffered.
///
/// A missing or unreadable file is fatal to startup, the same as the
/// dataset itself.
pub fn load_badge(path: &Path) -> Result<Vec<u8>, DataError> {
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded support badge");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_missing_badge_is_an_io_error() {
        let err = load_badge(Path::new("does/not/exist.png")).expect_err("missing file");
        assert!(matches!(err, DataError::Io(_)));
    }
}
