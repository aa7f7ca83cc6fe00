use serde::Serialize;

/// Maximum number of matches kept per document.
pub const MAX_MATCHES: usize = 5;

/// Lines of context kept on each side of a matching line.
pub const CONTEXT_LINES: usize = 2;

/// Length of the content preview attached to search results.
pub const PREVIEW_CHARS: usize = 500;

/// A line of a document that contains the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// 1-indexed line number.
    pub line_number: usize,
    /// The matching line, trimmed.
    pub text: String,
    /// The matching line with up to two lines on either side.
    pub context: String,
}

/// Collect the lines of `text` containing `query`, case-insensitively.
///
/// At most [`MAX_MATCHES`] are returned, in line order. An empty query
/// matches nothing.
pub fn find_matches(text: &str, query: &str) -> Vec<Match> {
    if query.is_empty() {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    let lines: Vec<&str> = text.lines().collect();
    let mut matches = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if !line.to_lowercase().contains(&query_lower) {
            continue;
        }

        let start = idx.saturating_sub(CONTEXT_LINES);
        let end = (idx + CONTEXT_LINES + 1).min(lines.len());

        matches.push(Match {
            line_number: idx + 1,
            text: line.trim().to_string(),
            context: lines[start..end].join("\n"),
        });

        if matches.len() == MAX_MATCHES {
            break;
        }
    }

    matches
}

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// The opening of a document as shown next to a search result.
pub fn preview(text: &str) -> String {
    truncate_chars(text, PREVIEW_CHARS)
}

/// Prepend line numbers to each line of text.
///
/// `start_line` is the number to assign to the first line (1-indexed).
pub fn add_line_numbers(text: &str, start_line: usize) -> String {
    text.lines()
        .enumerate()
        .map(|(i, line)| format!("{}: {}", start_line + i, line))
        .collect::<Vec<_>>()
        .join("\n")
}
