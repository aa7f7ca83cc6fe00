use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::{
    category::{BrowseScope, SearchScope},
    search::DEFAULT_LIMIT,
};

#[derive(Debug, Parser)]
#[command(
    name = "docscout",
    about = "Search and browse a directory of markdown documentation"
)]
pub struct Cli {
    /// Documentation directory (defaults to $DOCSCOUT_DOCS_DIR, then a
    /// nearby scraped_docs/, then the XDG data directory)
    #[arg(long, global = true)]
    pub docs_dir: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank documents by keyword relevance
    Search(SearchArgs),
    /// List documents in a category, or an overview of all categories
    Category(CategoryArgs),
    /// Print a document by identifier or docs:// reference
    Get(GetArgs),
    /// List every document with its resource metadata
    List(ListArgs),
    /// Start MCP server for AI agent integration
    Mcp(McpArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Search --

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// The search query
    pub query: String,

    /// Search only within this category
    #[arg(short = 'c', long, value_enum, default_value_t = SearchScope::All)]
    pub category: SearchScope,

    /// Number of results to return
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    pub count: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Output the Markdown report served to MCP clients
    #[arg(long, conflicts_with = "json")]
    pub markdown: bool,
}

// -- Category --

#[derive(Debug, Parser)]
pub struct CategoryArgs {
    /// `overview` or one of the documentation categories
    #[arg(value_enum)]
    pub category: BrowseScope,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Get --

#[derive(Debug, Parser)]
pub struct GetArgs {
    /// Document reference: identifier or docs://identifier
    pub reference: String,

    /// Output as JSON with metadata
    #[arg(long)]
    pub json: bool,

    /// Prefix each line with its line number
    #[arg(long, conflicts_with = "json")]
    pub line_numbers: bool,
}

// -- List --

#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- MCP --

#[derive(Debug, Parser)]
pub struct McpArgs {
    /// Server name reported to MCP clients
    #[arg(long)]
    pub name: Option<String>,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "docscout",
            &mut std::io::stdout(),
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_search_defaults() {
        let cli = Cli::parse_from(["docscout", "search", "hello"]);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.query, "hello");
                assert_eq!(args.category, SearchScope::All);
                assert_eq!(args.count, DEFAULT_LIMIT);
                assert!(!args.json);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn parse_search_category() {
        let cli = Cli::parse_from([
            "docscout",
            "search",
            "transport",
            "-c",
            "getting_started",
        ]);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.category, SearchScope::GettingStarted);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn parse_category_overview() {
        let cli = Cli::parse_from(["docscout", "category", "overview"]);
        match cli.command {
            Command::Category(args) => {
                assert_eq!(args.category, BrowseScope::Overview)
            }
            _ => panic!("expected category command"),
        }
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(Cli::try_parse_from(["docscout", "category", "other"]).is_err());
    }

    #[test]
    fn global_docs_dir() {
        let cli =
            Cli::parse_from(["docscout", "list", "--docs-dir", "/tmp/docs"]);
        assert_eq!(cli.docs_dir, Some(PathBuf::from("/tmp/docs")));
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
