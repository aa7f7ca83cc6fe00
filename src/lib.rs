//! docscout - keyword search and category browsing over a directory of
//! markdown documentation.
//!
//! The corpus is a flat directory of `.md` files. Nothing is indexed ahead
//! of time: every query rescans the directory, classifies documents by
//! filename, extracts titles and descriptions, and ranks them with a
//! keyword heuristic. Documents are addressed externally as `docs://`
//! references and can be served to AI agents over MCP.
//!
//! # Quick start
//!
//! ```no_run
//! use docscout::{Corpus, DocsDir};
//! use docscout::search::{self, SearchParams};
//!
//! let docs_dir = DocsDir::resolve(None).unwrap();
//! let corpus = Corpus::new(docs_dir.root());
//!
//! let outcome = search::execute_search(&SearchParams::new("transport"), &corpus);
//! for r in &outcome.results {
//!     println!("{} ({:.0}) {}", r.identifier, r.relevance, r.title);
//! }
//! ```

pub mod browse;
pub mod category;
pub mod cli;
pub mod corpus;
pub mod docs_dir;
pub mod error;
pub mod mcp;
pub mod metadata;
pub mod reference;
pub mod resources;
pub mod scoring;
pub mod search;
pub mod text_util;
pub mod walker;

pub use category::{Category, classify};
pub use corpus::{Corpus, Document};
pub use docs_dir::DocsDir;
pub use error::{Error, Result};
