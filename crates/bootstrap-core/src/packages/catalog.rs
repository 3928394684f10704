//! Curated quick-pick package catalog

use anyhow::{Context, Result};
use serde::Deserialize;

const CATALOG_YAML: &str = include_str!("../../assets/packages.yaml");

/// One quick-pick entry: a Conan specifier plus a short hint for the prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub spec: String,
    #[serde(default)]
    pub summary: String,
}

/// The curated list of commonly used packages.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub packages: Vec<CatalogEntry>,
}

impl Catalog {
    /// Parse the catalog embedded in the binary.
    pub fn load() -> Result<Self> {
        serde_yaml::from_str(CATALOG_YAML).context("Failed to parse embedded package catalog")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.packages.is_empty());
        assert!(catalog.packages.iter().any(|entry| entry.spec == "fmt/11.2.0"));
    }

    #[test]
    fn entries_are_versioned_specifiers() {
        let catalog = Catalog::load().unwrap();
        for entry in &catalog.packages {
            assert!(entry.spec.contains('/'), "unversioned spec: {}", entry.spec);
            assert!(
                !entry.spec.contains(char::is_whitespace),
                "spec with whitespace: {}",
                entry.spec
            );
        }
    }
}
