//! Title and description extraction from raw document text.

use crate::text_util::truncate_chars;

/// Title used when a document has no usable first line.
pub const UNTITLED: &str = "Untitled Document";

/// Maximum description length before truncation.
pub const DESCRIPTION_CHARS: usize = 150;

/// Content lines shorter than this never become a description.
const MIN_DESCRIPTION_CHARS: usize = 20;

/// Lines at the top of scraped pages that carry site chrome, not content.
const BOILERPLATE_PREFIXES: &[&str] =
    &["[", "Version", "Search...", "Navigation", "On this page"];

/// Defaults keyed by identifier substring, first hit wins.
const TOPIC_DESCRIPTIONS: &[(&[&str], &str)] = &[
    (
        &["getting-started", "intro"],
        "Introduction and getting started guide for protocol development",
    ),
    (&["architecture"], "Architecture overview and core concepts"),
    (&["build-server"], "Complete guide for building servers"),
    (
        &["build-client"],
        "Guide for building clients and integrations",
    ),
    (&["tools"], "Tools specification and implementation guide"),
    (&["resources"], "Resources specification and usage patterns"),
    (&["prompts"], "Prompts specification and best practices"),
    (&["transports"], "Transport mechanisms and protocol details"),
    (&["security"], "Security best practices and considerations"),
    (
        &["troubleshooting", "debugging"],
        "Troubleshooting guide and debugging techniques",
    ),
];

const GENERIC_DESCRIPTION: &str = "Documentation and reference material";

/// The text of a level-1 heading line (`# Title`), if `line` is one.
fn h1_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    (!text.is_empty()).then_some(text)
}

/// Extract a document title.
///
/// Prefers the first level-1 heading anywhere in the text. Otherwise takes
/// the first non-blank line among the first ten that is not site chrome
/// (a bracketed link or a `Version` banner).
pub fn extract_title(text: &str) -> String {
    if let Some(heading) = text.lines().find_map(h1_text) {
        return heading.to_string();
    }

    text.lines()
        .take(10)
        .find(|line| {
            !line.trim().is_empty()
                && !line.starts_with('[')
                && !line.starts_with("Version")
        })
        .map_or_else(|| UNTITLED.to_string(), |line| line.trim().to_string())
}

/// Extract a short description of a document.
///
/// The first substantial paragraph line after the main heading is used.
/// Documents without one get a default derived from their identifier.
pub fn extract_description(text: &str, identifier: &str) -> String {
    let description = first_paragraph(text)
        .unwrap_or_else(|| default_description(identifier));
    truncate_chars(description, DESCRIPTION_CHARS)
}

fn first_paragraph(text: &str) -> Option<&str> {
    let mut in_content = false;

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty()
            || BOILERPLATE_PREFIXES.iter().any(|p| trimmed.starts_with(p))
        {
            continue;
        }

        if trimmed.starts_with("# ") {
            in_content = true;
            continue;
        }

        // Section headings never make a good summary.
        if trimmed.starts_with('#') {
            continue;
        }

        if in_content && trimmed.chars().count() > MIN_DESCRIPTION_CHARS {
            return Some(trimmed);
        }
    }

    None
}

/// Fallback description chosen from the identifier's keywords.
pub fn default_description(identifier: &str) -> &'static str {
    TOPIC_DESCRIPTIONS
        .iter()
        .find(|(keys, _)| keys.iter().any(|k| identifier.contains(k)))
        .map_or(GENERIC_DESCRIPTION, |(_, description)| *description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_from_heading() {
        let text = "[Home](/)\n\n# My Document\n\nSome body text.";
        assert_eq!(extract_title(text), "My Document");
    }

    #[test]
    fn title_ignores_deeper_headings() {
        let text = "## Section\n# Real Title";
        assert_eq!(extract_title(text), "Real Title");
    }

    #[test]
    fn title_requires_space_after_hash() {
        let text = "#hashtag line\nsecond";
        assert_eq!(extract_title(text), "#hashtag line");
    }

    #[test]
    fn title_skips_chrome_lines() {
        let text = "[Skip to content](#main)\nVersion 2025-06-18\n\n  Plain Title  \n";
        assert_eq!(extract_title(text), "Plain Title");
    }

    #[test]
    fn title_only_looks_at_first_ten_lines() {
        let mut text = "[link]\n".repeat(10);
        text.push_str("Too late");
        assert_eq!(extract_title(&text), UNTITLED);
    }

    #[test]
    fn title_of_empty_text() {
        assert_eq!(extract_title(""), UNTITLED);
    }

    #[test]
    fn description_after_main_heading() {
        let text = "Search...\n# Architecture\n\nOn this page\n## Overview\nShort.\n\
                    The protocol follows a client-host-server architecture.\n";
        assert_eq!(
            extract_description(text, "architecture.md"),
            "The protocol follows a client-host-server architecture."
        );
    }

    #[test]
    fn description_ignores_text_before_heading() {
        let text = "A long preamble line before any heading at all\n# Title\n";
        assert_eq!(
            extract_description(text, "faq.md"),
            GENERIC_DESCRIPTION
        );
    }

    #[test]
    fn description_falls_back_per_topic() {
        assert_eq!(
            extract_description("# Title\n", "build-server.md"),
            "Complete guide for building servers"
        );
        assert_eq!(
            extract_description("", "intro.md"),
            "Introduction and getting started guide for protocol development"
        );
        assert_eq!(
            extract_description("", "debugging.md"),
            "Troubleshooting guide and debugging techniques"
        );
    }

    #[test]
    fn description_is_truncated() {
        let body = "word ".repeat(60);
        let text = format!("# Title\n{body}");
        let description = extract_description(&text, "x.md");
        assert_eq!(description.chars().count(), DESCRIPTION_CHARS + 3);
        assert!(description.ends_with("..."));
    }
}
