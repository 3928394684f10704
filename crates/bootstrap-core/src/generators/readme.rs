//! README rendering

/// Render the README: a level-1 heading with the project name followed by
/// the free-text description.
pub fn render_readme(name: &str, description: &str) -> String {
    format!("# {}\n\n{}\n", name, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_then_description() {
        let content = render_readme("my-game", "A tiny renderer.");
        assert_eq!(content, "# my-game\n\nA tiny renderer.\n");
    }

    #[test]
    fn empty_description_still_renders() {
        let content = render_readme("demo", "");
        assert!(content.starts_with("# demo\n"));
        assert!(content.ends_with('\n'));
    }
}
