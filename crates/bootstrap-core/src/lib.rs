//! Bootstrap Core - Shared library for the C++ project bootstrapper CLI
//!
//! This library carries everything behind the `cpp-bootstrap` binary: the
//! artifact generators, the package-list bookkeeping, the toolchain probes,
//! and the interactive prompt flow.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for artifact rendering,
//!   package bookkeeping, and compiler standard probing
//! - **Layer 2: External Collaborators** - Subprocess wrappers around git,
//!   conan, and the formatting-setup script
//! - **Layer 3: CLI/TUI Interface** - cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt flow

pub mod generators;
pub mod packages;
pub mod project;
pub mod toolchain;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use packages::PackageList;
pub use project::ProjectConfig;
pub use toolchain::{probe_cpp_standards, ToolError, ToolInfo};

#[cfg(feature = "tui")]
pub use tui::{run, BootstrapArgs};

/// Minimum CMake version offered as the descriptor prompt's default
pub const DEFAULT_CMAKE_VERSION: &str = "3.10";
