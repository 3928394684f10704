//! CMake version compatibility

use semver::Version;

/// Parse a possibly short version out of strings like "3.10" or
/// "cmake version 3.28.3". Missing minor/patch components default to zero.
pub fn parse_loose_version(raw: &str) -> Option<Version> {
    let token = raw
        .split_whitespace()
        .find(|t| t.chars().next().is_some_and(|c| c.is_ascii_digit()))?;
    let token = token.strip_prefix('v').unwrap_or(token);

    let mut parts = token.split('.');
    let major = parts.next().and_then(numeric_prefix)?;
    let minor = parts.next().and_then(numeric_prefix).unwrap_or(0);
    let patch = parts.next().and_then(numeric_prefix).unwrap_or(0);
    Some(Version::new(major, minor, patch))
}

fn numeric_prefix(part: &str) -> Option<u64> {
    let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Compare the installed cmake against the declared minimum.
/// Returns a warning message when the installation is too old.
pub fn check_cmake_compatibility(installed: &str, minimum: &str) -> Option<String> {
    let installed_ver = parse_loose_version(installed)?;
    let minimum_ver = parse_loose_version(minimum)?;

    if installed_ver < minimum_ver {
        Some(format!(
            "Installed CMake {} is older than the declared minimum {}",
            installed_ver, minimum_ver
        ))
    } else {
        None
    }
}
