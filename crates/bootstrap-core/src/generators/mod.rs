//! Artifact renderers and the skip-if-exists write policy

mod cmake;
mod conanfile;
mod readme;
mod source;

pub use cmake::render_cmakelists;
pub use conanfile::render_conanfile;
pub use readme::render_readme;
pub use source::{write_source_stub, MAIN_CPP_STUB};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Write `content` to `path` unless the file already exists.
///
/// Returns `false` (leaving the file untouched) when it was already
/// present. Existing artifacts are never merged or overwritten; re-runs
/// rely on this to stay idempotent.
pub fn write_if_absent(path: &Path, content: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/file.txt");
        assert!(write_if_absent(&path, "content").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn second_write_is_skipped_and_bytes_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.txt");
        assert!(write_if_absent(&path, "first").unwrap());
        assert!(!write_if_absent(&path, "second").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }
}
