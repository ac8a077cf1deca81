// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::match_like_matches_macro)]

//! # Verbete
//!
//! Extract structured word records from Wiktionary-style markup: grammatical
//! categories, glosses, and (for verbs) full Portuguese conjugation tables,
//! with dialect variants resolved through footnote markers.
//!
//! The crate consumes an already-parsed, renderer-neutral markup tree from a
//! [`ContentProvider`] and runs a purely synchronous extraction pipeline over
//! it:
//!
//! 1. Isolate the target language's section ([`extractors::language`])
//! 2. Split it into grammatical category sections ([`extractors::categories`])
//! 3. Pull cleaned glosses from each ([`extractors::definitions`])
//! 4. Parse conjugation tables, resolving multi-variant cells against the
//!    dialect footnotes ([`extractors::conjugation`], [`extractors::footnotes`])
//!
//! [`WordService`] fronts the pipeline with a per-`(word, language)` cache
//! (24 h TTL by default, negative results included).
//!
//! ## Quick Start
//!
//! ```ignore
//! use verbete::{WordService, ContentProvider};
//!
//! # fn main() -> verbete::Result<()> {
//! let provider = MyWiktionaryProvider::new();
//! let mut service = WordService::new(provider);
//!
//! if let Some(record) = service.lookup("esperar")? {
//!     for category in &record.categories {
//!         println!("{}: {} definitions", category.name, category.definitions.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Structural surprises in the markup never fail a lookup: each stage falls
//! back to its emptiest value and the pipeline continues. Only provider
//! failures surface as errors, and those are never cached.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Markup tree and provider boundary
pub mod markup;
pub mod provider;

// Extraction pipeline
pub mod extractors;

// Output records
pub mod model;

// Lookup service and cache
pub mod service;

// Configuration
pub mod config;

// Re-exports
pub use config::LookupOptions;
pub use error::{Error, Result};
pub use markup::{Node, NodeKind};
pub use model::{CategoryInfo, ConjugationBlock, ConjugationForm, ConjugationTense, WordRecord};
pub use provider::{ContentProvider, Page};
pub use service::WordService;

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
