use serde::Serialize;

use crate::{
    category::{self, Category, SearchScope},
    corpus::Corpus,
    text_util::{self, Match},
};

/// Default number of results returned by a search.
pub const DEFAULT_LIMIT: usize = 10;

/// Matches shown per result in human-readable output.
const DISPLAYED_MATCHES: usize = 3;

/// Characters of a matched line shown in human-readable output.
const DISPLAYED_MATCH_CHARS: usize = 100;

#[derive(Debug, Clone)]
pub struct SearchParams {
    pub query: String,
    pub scope: SearchScope,
    pub limit: usize,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            scope: SearchScope::All,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A document that scored above zero for a query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub identifier: String,
    pub uri: String,
    pub title: String,
    pub content_preview: String,
    pub category: Category,
    pub relevance: f64,
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub query: String,
    pub scope: SearchScope,
    /// Number of relevant documents before the limit was applied.
    pub total: usize,
    pub results: Vec<SearchResult>,
}

/// Execute a keyword search over the corpus.
///
/// 1. Scan the corpus, keeping documents admitted by the category scope
/// 2. Score each one and drop those scoring zero
/// 3. Sort by relevance, highest first (ties keep scan order)
/// 4. Limit to `params.limit` results
pub fn execute_search(params: &SearchParams, corpus: &Corpus) -> SearchOutcome {
    let query = params.query.trim();

    let mut results: Vec<SearchResult> = corpus
        .load(|id| params.scope.admits(category::classify(id)))
        .into_iter()
        .filter_map(|doc| {
            let relevance = crate::scoring::score(&doc.text, query);
            if relevance <= 0.0 {
                return None;
            }
            Some(SearchResult {
                uri: doc.uri(),
                title: doc.title(),
                content_preview: text_util::preview(&doc.text),
                category: doc.category(),
                relevance,
                matches: text_util::find_matches(&doc.text, query),
                identifier: doc.identifier,
            })
        })
        .collect();

    results.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));

    let total = results.len();
    results.truncate(params.limit);
    tracing::debug!(query, total, shown = results.len(), "search complete");

    SearchOutcome {
        query: query.to_string(),
        scope: params.scope,
        total,
        results,
    }
}

/// Render a search outcome as Markdown.
pub fn format_markdown(outcome: &SearchOutcome) -> String {
    let in_scope = match outcome.scope.category() {
        Some(c) => format!(" in category \"{c}\""),
        None => String::new(),
    };

    if outcome.total == 0 {
        let valid = category::CATEGORIES
            .iter()
            .map(|c| c.key())
            .collect::<Vec<_>>()
            .join(", ");
        return format!(
            "No documentation found matching \"{}\"{in_scope}.\n\n\
             Try:\n\
             - Using different keywords\n\
             - Searching in \"all\" categories\n\
             - Using broader search terms\n\n\
             Available categories: {valid}",
            outcome.query
        );
    }

    let suffix = if outcome.total == 1 { "" } else { "s" };
    let mut out = format!(
        "# Search Results for \"{}\"\n\nFound {} relevant document{suffix}{in_scope}:\n\n",
        outcome.query, outcome.total
    );

    for (i, r) in outcome.results.iter().enumerate() {
        out.push_str(&format!("## {}. {}\n", i + 1, r.title));
        out.push_str(&format!(
            "**File**: `{}` | **Category**: {} | **Relevance**: {:.0}\n\n",
            r.identifier, r.category, r.relevance
        ));

        if !r.matches.is_empty() {
            out.push_str("**Key matches:**\n");
            for m in r.matches.iter().take(DISPLAYED_MATCHES) {
                out.push_str(&format!(
                    "- Line {}: \"{}\"\n",
                    m.line_number,
                    text_util::truncate_chars(&m.text, DISPLAYED_MATCH_CHARS)
                ));
            }
            out.push('\n');
        }

        out.push_str(&format!("**Preview**: {}\n\n", r.content_preview));
        out.push_str(&format!("**Access full document**: `{}`\n\n---\n\n", r.uri));
    }

    let hidden = outcome.total - outcome.results.len();
    if hidden > 0 {
        out.push_str(&format!(
            "*Showing top {} results. {hidden} additional documents found.*\n",
            outcome.results.len()
        ));
    }

    out
}

/// Format results for terminal output.
pub fn format_human(outcome: &SearchOutcome) {
    if outcome.results.is_empty() {
        println!("No results found.");
        return;
    }

    for (i, r) in outcome.results.iter().enumerate() {
        println!(
            "{:>3}. [{:.1}] {} ({})",
            i + 1,
            r.relevance,
            r.identifier,
            r.category
        );
        println!("     {}", r.title);
        for m in r.matches.iter().take(DISPLAYED_MATCHES) {
            println!(
                "     {:>4}: {}",
                m.line_number,
                text_util::truncate_chars(&m.text, DISPLAYED_MATCH_CHARS)
            );
        }
    }
    println!("\n{} of {} result(s)", outcome.results.len(), outcome.total);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_corpus() -> (Corpus, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        let docs = [
            (
                "intro.md",
                "# Getting Started\n\nWelcome to the protocol.\n",
            ),
            (
                "architecture.md",
                "# Architecture\n\nHosts connect to servers over a transport.\n\
                 Each transport carries JSON-RPC messages.\n",
            ),
            (
                "build-server.md",
                "# Build a Server\n\nA server exposes tools over a transport.\n",
            ),
            (
                "governance.md",
                "# Governance\n\nHow decisions are made.\n",
            ),
            ("notes.txt", "transport transport transport"),
        ];
        for (name, body) in docs {
            std::fs::write(tmp.path().join(name), body).unwrap();
        }
        (Corpus::new(tmp.path()), tmp)
    }

    #[test]
    fn finds_single_welcome_document() {
        let (corpus, _tmp) = setup_corpus();
        let outcome = execute_search(&SearchParams::new("welcome"), &corpus);

        assert_eq!(outcome.total, 1);
        let r = &outcome.results[0];
        assert_eq!(r.identifier, "intro.md");
        assert_eq!(r.category, Category::GettingStarted);
        assert_eq!(r.matches.len(), 1);
        assert_eq!(r.matches[0].line_number, 3);
        assert_eq!(r.matches[0].text, "Welcome to the protocol.");
    }

    #[test]
    fn results_sorted_by_relevance() {
        let (corpus, _tmp) = setup_corpus();
        let outcome = execute_search(&SearchParams::new("transport"), &corpus);

        assert_eq!(outcome.total, 2);
        assert_eq!(outcome.results[0].identifier, "architecture.md");
        assert_eq!(outcome.results[1].identifier, "build-server.md");
        for pair in outcome.results.windows(2) {
            assert!(pair[0].relevance >= pair[1].relevance);
        }
    }

    #[test]
    fn scope_restricts_categories() {
        let (corpus, _tmp) = setup_corpus();
        let mut params = SearchParams::new("transport");
        params.scope = SearchScope::Development;

        let outcome = execute_search(&params, &corpus);
        assert_eq!(outcome.total, 1);
        assert_eq!(outcome.results[0].identifier, "build-server.md");
        assert_eq!(outcome.results[0].category, Category::Development);
    }

    #[test]
    fn limit_truncates_but_reports_total() {
        let (corpus, _tmp) = setup_corpus();
        let mut params = SearchParams::new("transport");
        params.limit = 1;

        let outcome = execute_search(&params, &corpus);
        assert_eq!(outcome.total, 2);
        assert_eq!(outcome.results.len(), 1);
        assert!(format_markdown(&outcome).contains("1 additional documents"));
    }

    #[test]
    fn zero_limit_still_reports_matches() {
        let (corpus, _tmp) = setup_corpus();
        let mut params = SearchParams::new("welcome");
        params.limit = 0;

        let outcome = execute_search(&params, &corpus);
        assert_eq!(outcome.total, 1);
        assert!(outcome.results.is_empty());

        let text = format_markdown(&outcome);
        assert!(text.starts_with("# Search Results for \"welcome\""));
        assert!(text.contains("1 additional documents found"));
    }

    #[test]
    fn empty_query_returns_nothing() {
        let (corpus, _tmp) = setup_corpus();
        let outcome = execute_search(&SearchParams::new("   "), &corpus);
        assert_eq!(outcome.total, 0);
        assert!(outcome.results.is_empty());
    }

    #[test]
    fn no_results_message_lists_categories() {
        let (corpus, _tmp) = setup_corpus();
        let mut params = SearchParams::new("xyzzy");
        params.scope = SearchScope::Tools;

        let text = format_markdown(&execute_search(&params, &corpus));
        assert!(text.starts_with("No documentation found matching \"xyzzy\""));
        assert!(text.contains("in category \"tools\""));
        assert!(text.contains(
            "getting_started, concepts, development, specification, tools, community"
        ));
    }

    #[test]
    fn markdown_lists_results_with_uris() {
        let (corpus, _tmp) = setup_corpus();
        let text =
            format_markdown(&execute_search(&SearchParams::new("welcome"), &corpus));
        assert!(text.contains("Found 1 relevant document:"));
        assert!(text.contains("## 1. Getting Started"));
        assert!(text.contains("- Line 3: \"Welcome to the protocol.\""));
        assert!(text.contains("`docs://intro.md`"));
    }

    #[test]
    fn missing_corpus_is_empty_not_error() {
        let tmp = tempfile::tempdir().unwrap();
        let corpus = Corpus::new(tmp.path().join("missing"));
        let outcome = execute_search(&SearchParams::new("anything"), &corpus);
        assert!(outcome.results.is_empty());
    }
}
