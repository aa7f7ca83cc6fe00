//! The fixed documentation taxonomy and the filename classifier.
//!
//! Classification is an ordered list of keyword rules; the first rule
//! with a matching keyword decides the category. Filenames often match
//! several families at once (`build-server.md` hits both "build" and
//! "server"), so the order of [`RULES`] is part of the contract.

use std::fmt;

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    GettingStarted,
    Concepts,
    Development,
    Specification,
    Tools,
    Community,
    /// Documents matching none of the keyword rules.
    Other,
}

/// The six real categories, in display order. `Other` is not one of them.
pub const CATEGORIES: [Category; 6] = [
    Category::GettingStarted,
    Category::Concepts,
    Category::Development,
    Category::Specification,
    Category::Tools,
    Category::Community,
];

/// Ordered (keywords, category) rules. First match wins.
const RULES: &[(&[&str], Category)] = &[
    (&["getting-started", "intro"], Category::GettingStarted),
    (&["concepts", "learn", "architecture"], Category::Concepts),
    (&["develop", "build", "connect"], Category::Development),
    (
        &["basic", "server", "client", "specification"],
        Category::Specification,
    ),
    (&["tools", "debugging", "inspector"], Category::Tools),
    (
        &["community", "governance", "communication"],
        Category::Community,
    ),
];

/// Classify a document by its identifier.
pub fn classify(identifier: &str) -> Category {
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| identifier.contains(k)))
        .map_or(Category::Other, |(_, category)| *category)
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::GettingStarted => "getting_started",
            Category::Concepts => "concepts",
            Category::Development => "development",
            Category::Specification => "specification",
            Category::Tools => "tools",
            Category::Community => "community",
            Category::Other => "other",
        }
    }

    /// Default sort weight for resource listings; higher comes first.
    pub fn priority(self) -> f32 {
        match self {
            Category::GettingStarted => 1.0,
            Category::Concepts => 0.9,
            Category::Development => 0.8,
            Category::Specification => 0.7,
            Category::Tools => 0.6,
            Category::Community => 0.5,
            Category::Other => 0.3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::GettingStarted => "Getting Started",
            Category::Concepts => "Core Concepts",
            Category::Development => "Development",
            Category::Specification => "Protocol Specification",
            Category::Tools => "Tools & Debugging",
            Category::Community => "Community & Governance",
            Category::Other => "Other",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Category::GettingStarted => "Introduction and basics",
            Category::Concepts => "Architecture and design principles",
            Category::Development => "Building servers and clients",
            Category::Specification => "Technical protocol details",
            Category::Tools => "Development tools and debugging",
            Category::Community => "Governance and contribution guidelines",
            Category::Other => "Uncategorized documents",
        }
    }

    /// Subsection heading used when listing a single category.
    pub fn subsection(self, identifier: &str) -> &'static str {
        let table: &[(&str, &str)] = match self {
            Category::Concepts => &[
                ("architecture", "Architecture"),
                ("tools", "Tools"),
                ("resources", "Resources"),
                ("prompts", "Prompts"),
                ("transports", "Transports"),
            ],
            Category::Development => &[
                ("server", "Server Development"),
                ("client", "Client Development"),
                ("connect", "Connection Setup"),
            ],
            Category::Specification => &[
                ("basic", "Base Protocol"),
                ("server", "Server Features"),
                ("client", "Client Features"),
            ],
            _ => &[],
        };

        table
            .iter()
            .find(|(needle, _)| identifier.contains(needle))
            .map_or("General", |(_, heading)| *heading)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Category filter accepted by search: a real category or everything.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum SearchScope {
    #[default]
    All,
    GettingStarted,
    Concepts,
    Development,
    Specification,
    Tools,
    Community,
}

impl SearchScope {
    pub fn category(self) -> Option<Category> {
        match self {
            SearchScope::All => None,
            SearchScope::GettingStarted => Some(Category::GettingStarted),
            SearchScope::Concepts => Some(Category::Concepts),
            SearchScope::Development => Some(Category::Development),
            SearchScope::Specification => Some(Category::Specification),
            SearchScope::Tools => Some(Category::Tools),
            SearchScope::Community => Some(Category::Community),
        }
    }

    pub fn admits(self, category: Category) -> bool {
        self.category().is_none_or(|c| c == category)
    }
}

/// Target of a browse request: one real category or the overview.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum BrowseScope {
    Overview,
    GettingStarted,
    Concepts,
    Development,
    Specification,
    Tools,
    Community,
}

impl BrowseScope {
    pub fn category(self) -> Option<Category> {
        match self {
            BrowseScope::Overview => None,
            BrowseScope::GettingStarted => Some(Category::GettingStarted),
            BrowseScope::Concepts => Some(Category::Concepts),
            BrowseScope::Development => Some(Category::Development),
            BrowseScope::Specification => Some(Category::Specification),
            BrowseScope::Tools => Some(Category::Tools),
            BrowseScope::Community => Some(Category::Community),
        }
    }
}
