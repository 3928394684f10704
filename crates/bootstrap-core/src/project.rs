//! Per-run project configuration

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Choices collected from the user during one bootstrap run.
///
/// Threaded through the flow explicitly; nothing here outlives the process.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Absolute project root
    pub root: PathBuf,
    /// Project / executable name, free of whitespace
    pub executable_name: String,
    /// Minimum CMake version declared by the descriptor
    pub cmake_version: String,
    /// Chosen C++ standard ("17", "20", ...)
    pub cpp_standard: String,
    /// Glob sources recursively instead of building src/main.cpp alone
    pub discover_sources: bool,
    /// Emit set(CMAKE_EXPORT_COMPILE_COMMANDS ON)
    pub export_compile_commands: bool,
    /// Copy an assets/ directory into the build tree after each build
    pub copy_assets: bool,
}

/// Generated artifacts offered for deletion on re-runs, programming group.
pub const PROGRAMMING_ARTIFACTS: &[&str] =
    &[".clangd", ".clang-format", "CMakeLists.txt", "conanfile.txt"];

/// Generated artifacts offered for deletion on re-runs, everything else.
pub const OTHER_ARTIFACTS: &[&str] = &[".gitignore", "README.md"];

/// Resolve the project root from user input.
///
/// Empty input falls back to the current directory; relative paths are
/// anchored there. The directory tree is created when absent.
pub fn resolve_project_root(input: &str) -> Result<PathBuf> {
    let current = env::current_dir().context("Failed to determine current directory")?;
    resolve_root_from(&current, input)
}

fn resolve_root_from(base: &Path, input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    let root = if trimmed.is_empty() {
        base.to_path_buf()
    } else {
        let candidate = PathBuf::from(trimmed);
        if candidate.is_absolute() {
            candidate
        } else {
            base.join(candidate)
        }
    };
    if !root.exists() {
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create project root {}", root.display()))?;
    }
    Ok(root)
}

/// Default executable name for a root: its final path component.
pub fn default_executable_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string())
}

/// Executable names must be non-empty and free of whitespace.
pub fn is_valid_executable_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_input_resolves_to_base() {
        let dir = TempDir::new().unwrap();
        let root = resolve_root_from(dir.path(), "  ").unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn relative_input_is_anchored_and_created() {
        let dir = TempDir::new().unwrap();
        let root = resolve_root_from(dir.path(), "nested/project").unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, dir.path().join("nested/project"));
        assert!(root.is_dir());
    }

    #[test]
    fn absolute_input_passes_through() {
        let dir = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let target = other.path().join("abs");
        let root = resolve_root_from(dir.path(), &target.to_string_lossy()).unwrap();
        assert_eq!(root, target);
        assert!(root.is_dir());
    }

    #[test]
    fn default_name_is_final_component() {
        assert_eq!(default_executable_name(Path::new("/tmp/my-game")), "my-game");
    }

    #[test]
    fn executable_name_rejects_whitespace() {
        assert!(is_valid_executable_name("demo"));
        assert!(is_valid_executable_name("my-game_2"));
        assert!(!is_valid_executable_name("my game"));
        assert!(!is_valid_executable_name("tabbed\tname"));
        assert!(!is_valid_executable_name(""));
    }
}
