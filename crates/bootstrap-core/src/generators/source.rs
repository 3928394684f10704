//! Starter translation unit

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::write_if_absent;

/// Fixed hello-world stub written to src/main.cpp.
pub const MAIN_CPP_STUB: &str = "#include <iostream>\n\n\
int main() {\n    std::cout << \"Hello, World!\" << std::endl;\n    return 0;\n}\n";

/// Create `src/main.cpp` under `root`, skipping when it is already there.
///
/// Returns the stub path and whether the file was written this run.
pub fn write_source_stub(root: &Path) -> Result<(PathBuf, bool)> {
    let path = root.join("src").join("main.cpp");
    let written = write_if_absent(&path, MAIN_CPP_STUB)?;
    Ok((path, written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn creates_stub_under_src() {
        let dir = TempDir::new().unwrap();
        let (path, written) = write_source_stub(dir.path()).unwrap();
        assert!(written);
        assert_eq!(path, dir.path().join("src/main.cpp"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("#include <iostream>"));
        assert!(content.contains("Hello, World!"));
        assert!(content.trim_end().ends_with('}'));
    }

    #[test]
    fn existing_stub_is_kept() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("main.cpp"), "// custom").unwrap();

        let (path, written) = write_source_stub(dir.path()).unwrap();
        assert!(!written);
        assert_eq!(fs::read_to_string(path).unwrap(), "// custom");
    }
}
