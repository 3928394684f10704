//! conanfile.txt rendering

use crate::packages::PackageList;

const FOOTER: &str = "\n[generators]\nCMakeDeps\nCMakeToolchain\n\n[layout]\ncmake_layout\n";

/// Render the dependency manifest: a `[requires]` section listing the
/// specifiers in insertion order, then the fixed generator and layout
/// directives.
pub fn render_conanfile(packages: &PackageList) -> String {
    let mut out = String::from("[requires]\n");
    for spec in packages.specs() {
        out.push_str(spec);
        out.push('\n');
    }
    out.push_str(FOOTER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_packages_in_insertion_order() {
        let mut packages = PackageList::new();
        packages.add("fmt/11.2.0");
        packages.add("glfw/3.4");
        let content = render_conanfile(&packages);
        let requires_end = content.find("\n[generators]").unwrap();
        assert_eq!(&content[..requires_end], "[requires]\nfmt/11.2.0\nglfw/3.4\n");
        assert!(content.contains("CMakeDeps\nCMakeToolchain"));
        assert!(content.contains("[layout]\ncmake_layout"));
    }

    #[test]
    fn add_remove_add_keeps_only_survivor() {
        let mut packages = PackageList::new();
        packages.add("fmt/11.2.0");
        packages.remove("fmt/11.2.0");
        packages.add("glm/cci.20230113");
        let content = render_conanfile(&packages);
        assert!(!content.contains("fmt/11.2.0"));
        assert!(content.contains("[requires]\nglm/cci.20230113\n"));
    }
}
