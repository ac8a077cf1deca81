//! Word lookup service with a TTL result cache.
//!
//! `WordService` is the crate's entry point: it runs the full extraction
//! pipeline over documents fetched from a [`ContentProvider`] and memoizes
//! the assembled records per `(word, language)` key.

use std::collections::HashMap;
use std::time::Instant;

use crate::config::LookupOptions;
use crate::error::Result;
use crate::extractors::{
    category_sections, conjugation_blocks, definitions, dialect_markers, language_section,
};
use crate::model::{CategoryInfo, WordRecord};
use crate::provider::ContentProvider;

/// One memoized lookup outcome. `value` is `None` for a word with no page or
/// no section in the target language; negative results are cached like any
/// other.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Option<WordRecord>,
    written_at: Instant,
}

/// Looks up words through a content provider and caches the results.
///
/// There is no single-flight coalescing: two lookups racing on the same key
/// both run the pipeline, and the later write wins. Writes are idempotent,
/// so this costs duplicate work, never correctness. The cache is unbounded
/// for the process lifetime; `clear_cache` is the only eviction.
pub struct WordService<P> {
    provider: P,
    options: LookupOptions,
    cache: HashMap<(String, String), CacheEntry>,
}

impl<P: ContentProvider> WordService<P> {
    /// Create a service with default options (24 h TTL, Portuguese, European
    /// Portuguese dialect).
    pub fn new(provider: P) -> Self {
        Self::with_options(provider, LookupOptions::default())
    }

    /// Create a service with explicit options.
    pub fn with_options(provider: P, options: LookupOptions) -> Self {
        Self {
            provider,
            options,
            cache: HashMap::new(),
        }
    }

    /// Look up a word in the default language.
    pub fn lookup(&mut self, word: &str) -> Result<Option<WordRecord>> {
        let language = self.options.language.clone();
        self.lookup_in(word, &language)
    }

    /// Look up a word in the given language.
    ///
    /// The word is lowercased before keying and fetching. A live cache entry
    /// is returned without recomputation, including a stored absent result.
    /// On a miss or an expired entry the pipeline runs and its outcome
    /// overwrites the entry. Provider failures propagate and leave the cache
    /// untouched, so the next call retries.
    pub fn lookup_in(&mut self, word: &str, language: &str) -> Result<Option<WordRecord>> {
        let word = word.to_lowercase();
        let key = (word.clone(), language.to_string());

        if let Some(entry) = self.cache.get(&key) {
            if entry.written_at.elapsed() < self.options.ttl {
                log::debug!("cache hit: '{}' ({})", word, language);
                return Ok(entry.value.clone());
            }
            log::debug!("cache entry expired: '{}' ({})", word, language);
        }

        let value = self.run_pipeline(&word, language)?;
        self.cache.insert(
            key,
            CacheEntry {
                value: value.clone(),
                written_at: Instant::now(),
            },
        );
        Ok(value)
    }

    /// Drop every cache entry.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Fetch the page and assemble the record. `Ok(None)` covers both a
    /// missing page and a page without the target language's section.
    fn run_pipeline(&self, word: &str, language: &str) -> Result<Option<WordRecord>> {
        let page = match self.provider.fetch(word)? {
            Some(page) => page,
            None => {
                log::debug!("no page for '{}'", word);
                return Ok(None);
            },
        };

        let section = match language_section(&page.root, language) {
            Some(section) => section,
            None => {
                log::debug!("page '{}' has no {} section", page.title, language);
                return Ok(None);
            },
        };

        let mut categories = Vec::new();
        for (name, nodes) in category_sections(section) {
            let glosses = definitions(nodes);
            let markers = dialect_markers(nodes, &self.options.dialect);
            let blocks = conjugation_blocks(nodes, &markers);

            categories.push(CategoryInfo {
                name,
                definitions: glosses,
                conjugations: if blocks.is_empty() { None } else { Some(blocks) },
            });
        }

        Ok(Some(WordRecord {
            word: word.to_string(),
            categories,
        }))
    }
}
