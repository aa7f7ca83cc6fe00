//! Category browsing: one category in full, or an overview of all six.

use serde::Serialize;

use crate::{
    category::{self, BrowseScope, CATEGORIES, Category},
    corpus::{Corpus, Document},
};

/// Entries shown per category in the overview.
pub const OVERVIEW_ENTRIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocInfo {
    pub identifier: String,
    pub title: String,
    pub description: String,
    pub uri: String,
}

impl From<&Document> for DocInfo {
    fn from(doc: &Document) -> Self {
        Self {
            identifier: doc.identifier.clone(),
            title: doc.title(),
            description: doc.description(),
            uri: doc.uri(),
        }
    }
}

/// One non-empty category in the overview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub category: Category,
    pub total: usize,
    /// The first [`OVERVIEW_ENTRIES`] documents in scan order.
    pub entries: Vec<DocInfo>,
    pub remaining: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BrowseOutcome {
    Overview { groups: Vec<CategoryGroup> },
    Category { category: Category, docs: Vec<DocInfo> },
    /// The category exists but has no documents right now.
    Empty { category: Category },
}

/// Documents of a single category, in scan order.
pub fn list_category(corpus: &Corpus, category: Category) -> Vec<DocInfo> {
    corpus
        .load(|id| category::classify(id) == category)
        .iter()
        .map(DocInfo::from)
        .collect()
}

/// Group the whole corpus by category, omitting empty groups and `other`.
pub fn overview(corpus: &Corpus) -> Vec<CategoryGroup> {
    let docs = corpus.load_all();

    CATEGORIES
        .iter()
        .filter_map(|&category| {
            let members: Vec<&Document> =
                docs.iter().filter(|d| d.category() == category).collect();
            if members.is_empty() {
                return None;
            }
            Some(CategoryGroup {
                category,
                total: members.len(),
                entries: members
                    .iter()
                    .take(OVERVIEW_ENTRIES)
                    .map(|d| DocInfo::from(*d))
                    .collect(),
                remaining: members.len().saturating_sub(OVERVIEW_ENTRIES),
            })
        })
        .collect()
}

pub fn browse(corpus: &Corpus, scope: BrowseScope) -> BrowseOutcome {
    match scope.category() {
        None => BrowseOutcome::Overview {
            groups: overview(corpus),
        },
        Some(category) => {
            let docs = list_category(corpus, category);
            if docs.is_empty() {
                BrowseOutcome::Empty { category }
            } else {
                BrowseOutcome::Category { category, docs }
            }
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Render a browse outcome as Markdown.
pub fn format_markdown(outcome: &BrowseOutcome) -> String {
    match outcome {
        BrowseOutcome::Overview { groups } => format_overview(groups),
        BrowseOutcome::Category { category, docs } => {
            format_category(*category, docs)
        }
        BrowseOutcome::Empty { category } => {
            let mut out = format!(
                "No documentation found in category \"{category}\".\n\nAvailable categories:\n"
            );
            for c in CATEGORIES {
                out.push_str(&format!("- {}: {}\n", c.key(), c.summary()));
            }
            out
        }
    }
}

fn format_overview(groups: &[CategoryGroup]) -> String {
    let mut out =
        String::from("# Documentation Overview\n\n## Available Categories\n\n");

    if groups.is_empty() {
        out.push_str("No documents are available.\n");
        return out;
    }

    for group in groups {
        out.push_str(&format!(
            "### {} ({})\n*{} document{} available*\n\n",
            group.category.title(),
            group.category.summary(),
            group.total,
            plural(group.total)
        ));
        for doc in &group.entries {
            out.push_str(&format!("- **{}** - {}\n", doc.title, doc.description));
            out.push_str(&format!("  *Resource*: `{}`\n", doc.uri));
        }
        if group.remaining > 0 {
            out.push_str(&format!(
                "  *... and {} more documents*\n",
                group.remaining
            ));
        }
        out.push('\n');
    }

    out
}

fn format_category(category: Category, docs: &[DocInfo]) -> String {
    let mut out = format!(
        "# {}\n\n## {} Document{} Available\n\n",
        category.title(),
        docs.len(),
        plural(docs.len())
    );

    // Subsections in first-seen order.
    let mut sections: Vec<(&str, Vec<&DocInfo>)> = Vec::new();
    for doc in docs {
        let heading = category.subsection(&doc.identifier);
        match sections.iter_mut().find(|(h, _)| *h == heading) {
            Some((_, members)) => members.push(doc),
            None => sections.push((heading, vec![doc])),
        }
    }

    let show_headings = sections.len() > 1;
    for (heading, members) in &sections {
        if show_headings {
            out.push_str(&format!("### {heading}\n\n"));
        }
        for doc in members {
            out.push_str(&format!("#### {}\n{}\n\n", doc.title, doc.description));
            out.push_str(&format!("**Resource**: `{}`\n", doc.uri));
            out.push_str(&format!("**File**: `{}`\n\n", doc.identifier));
        }
    }

    out
}
