//! Toolchain probing and external tool collaborators
//!
//! This module provides:
//! - Availability probes for the tools the generated project leans on
//!   (gcc, cmake, git, conan)
//! - Subprocess wrappers for git, conan search, and the formatting-setup
//!   script

pub mod check;
pub mod script;
pub mod vcs;
pub mod version;

pub use check::{
    check_cmake, check_conan, check_gcc, check_git, probe_cpp_standards, ToolInfo,
    CMAKE_CXX_STANDARDS,
};
pub use script::{find_python, run_format_setup, search_packages};
pub use vcs::{add_submodule, init_repo, is_git_repo, submodule_catalog, SubmoduleSpec};
pub use version::check_cmake_compatibility;

use thiserror::Error;

/// Failures surfaced by the external tool layer.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The child process could not be spawned or reported failure.
    #[error("{command} failed: {details}")]
    CommandFailed { command: String, details: String },
    /// No Python interpreter could be found for the formatting script.
    #[error("Neither 'python3' nor 'python' is available in PATH")]
    MissingInterpreter,
}
