//! Toolchain availability and compiler standard probing

use std::process::Command;

use regex::Regex;

/// Probe result for an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe_version(name: &'static str, binary: &str) -> ToolInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout)
                .lines()
                .next()
                .unwrap_or("")
                .trim()
                .to_string();
            ToolInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => ToolInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if gcc is available
pub fn check_gcc() -> ToolInfo {
    probe_version("gcc", "gcc")
}

/// Check if CMake is available
pub fn check_cmake() -> ToolInfo {
    probe_version("CMake", "cmake")
}

/// Check if git is available
pub fn check_git() -> ToolInfo {
    probe_version("git", "git")
}

/// Check if the Conan client is available
pub fn check_conan() -> ToolInfo {
    probe_version("Conan", "conan")
}

/// C++ standards CMake knows how to set, oldest to newest.
pub const CMAKE_CXX_STANDARDS: &[&str] = &["98", "11", "14", "17", "20", "23", "26"];

/// Query the installed gcc for the -std=c++ flags it accepts.
///
/// Scrapes `gcc -v --help` output and keeps the tokens CMake understands,
/// in the oldest-to-newest ordering of [`CMAKE_CXX_STANDARDS`] so the last
/// entry is always the newest. Returns an empty list when gcc is missing
/// or exits non-zero; the caller decides how to fall back.
pub fn probe_cpp_standards() -> Vec<String> {
    let output = match Command::new("gcc").args(["-v", "--help"]).output() {
        Ok(out) if out.status.success() => out,
        _ => return Vec::new(),
    };
    standards_from_help(&String::from_utf8_lossy(&output.stdout))
}

fn standards_from_help(help: &str) -> Vec<String> {
    let flag = Regex::new(r"-std=c\+\+([0-9a-z]+)").expect("standard flag pattern");
    let mut seen: Vec<String> = Vec::new();
    for capture in flag.captures_iter(help) {
        let token = capture[1].to_string();
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    CMAKE_CXX_STANDARDS
        .iter()
        .filter(|standard| seen.iter().any(|token| token == *standard))
        .map(|standard| standard.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrapes_standard_tokens_from_help_text() {
        let help = "\
  -std=c++11                  Conform to the ISO 2011 C++ standard.\n\
  -std=c++14                  Conform to the ISO 2014 C++ standard.\n\
  -std=c++17                  Conform to the ISO 2017 C++ standard.\n\
  -std=c++1z                  Deprecated in favor of -std=c++17.\n";
        assert_eq!(standards_from_help(help), vec!["11", "14", "17"]);
    }

    #[test]
    fn result_follows_cmake_ordering_not_help_ordering() {
        let help = "-std=c++20 ...\n-std=c++11 ...\n-std=c++17 ...\n";
        assert_eq!(standards_from_help(help), vec!["11", "17", "20"]);
    }

    #[test]
    fn unknown_tokens_are_filtered_out() {
        let help = "-std=c++2a ...\n-std=c++98 ...\n";
        assert_eq!(standards_from_help(help), vec!["98"]);
    }

    #[test]
    fn empty_help_yields_empty_list() {
        assert!(standards_from_help("").is_empty());
    }

    #[test]
    fn newest_supported_standard_is_last() {
        assert_eq!(CMAKE_CXX_STANDARDS.last(), Some(&"26"));
    }
}
