//! Version-control collaborators
//!
//! Thin wrappers over the git CLI. Only success/failure and trimmed output
//! are surfaced; callers never see git's structured plumbing.

use std::path::Path;
use std::process::Command;

use url::Url;

use super::ToolError;

/// A fixed external repository offered as a submodule.
#[derive(Debug, Clone)]
pub struct SubmoduleSpec {
    pub name: &'static str,
    pub url: Url,
}

/// External repositories the flow offers to link in.
pub fn submodule_catalog() -> Vec<SubmoduleSpec> {
    let parse = |raw: &str| Url::parse(raw).expect("submodule url");
    vec![
        SubmoduleSpec {
            name: "clang_formatting",
            url: parse("https://github.com/cpp-toolbox/clang_formatting.git"),
        },
        SubmoduleSpec {
            name: "sbpt",
            url: parse("https://github.com/cpp-toolbox/sbpt.git"),
        },
    ]
}

fn run_git(args: &[&str], cwd: Option<&Path>) -> Result<String, ToolError> {
    let rendered = format!("git {}", args.join(" "));
    let mut command = Command::new("git");
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = command.output().map_err(|e| ToolError::CommandFailed {
        command: rendered.clone(),
        details: e.to_string(),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(ToolError::CommandFailed {
            command: rendered,
            details: if stderr.is_empty() { "unknown error".to_string() } else { stderr },
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// True when `path` is inside a git work tree.
pub fn is_git_repo(path: &Path) -> bool {
    let path = path.to_string_lossy();
    run_git(&["-C", &path, "rev-parse"], None).is_ok()
}

/// Initialize an empty repository at `root`.
pub fn init_repo(root: &Path) -> Result<(), ToolError> {
    run_git(&["init"], Some(root)).map(|_| ())
}

/// Link `url` as a submodule of the repository at `root`.
pub fn add_submodule(root: &Path, url: &Url) -> Result<(), ToolError> {
    run_git(&["submodule", "add", url.as_str()], Some(root)).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fresh_directory_is_not_a_repo() {
        let dir = TempDir::new().unwrap();
        assert!(!is_git_repo(dir.path()));
    }

    #[test]
    fn init_makes_a_detectable_repo() {
        let dir = TempDir::new().unwrap();
        init_repo(dir.path()).unwrap();
        assert!(is_git_repo(dir.path()));
    }

    #[test]
    fn catalog_urls_are_well_formed() {
        let catalog = submodule_catalog();
        assert_eq!(catalog.len(), 2);
        for submodule in catalog {
            assert_eq!(submodule.url.scheme(), "https");
            assert!(submodule.url.path().ends_with(".git"));
        }
    }
}
