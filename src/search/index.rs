//! Pre-built inverted index: loading and query execution.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};
use thiserror::Error;

use super::query::{BoolMode, SearchOptions};
use crate::stem::Stem;

/// Error returned when loading a serialized search index fails.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The index file could not be read.
    #[error("search index not found at {path}: {source}")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The index file is not valid index JSON.
    #[error("failed to parse search index: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One indexed page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Page title.
    pub title: String,
    /// Full plain-text content of the page.
    pub body: String,
}

/// An indexed page together with the link it is reachable at.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IndexedDocument {
    /// Link to the page, e.g. `/lessons/ownership/`.
    reference: String,
    #[serde(flatten)]
    doc: Document,
}

/// Per-document posting for one term: how often the term occurs in each
/// field of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Posting {
    /// Index into the document table.
    doc: usize,
    /// Occurrences in the title.
    #[serde(default)]
    title_freq: u32,
    /// Occurrences in the body.
    #[serde(default)]
    body_freq: u32,
}

/// A ranked search hit.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// Link to the matching page.
    pub reference: String,
    /// The matching page itself.
    pub doc: Document,
    /// Combined boost-weighted score, higher is better.
    pub score: f32,
}

/// A pre-built search index as shipped by the site generator.
///
/// Terms are stored pre-stemmed; queries are stemmed with the same algorithm
/// before lookup. The index is read-only: building it is the generator's
/// job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIndex {
    /// Index format version.
    version: u32,
    /// All indexed pages.
    documents: Vec<IndexedDocument>,
    /// Inverted index: stemmed term to postings.
    terms: HashMap<String, Vec<Posting>>,
}

impl SearchIndex {
    /// Parse an index from its JSON serialization.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let index: Self = serde_json::from_str(json)?;
        tracing::debug!(
            "Parsed search index v{}: {} terms, {} documents",
            index.version,
            index.terms.len(),
            index.documents.len()
        );
        Ok(index)
    }

    /// Load an index from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let start = std::time::Instant::now();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::NotFound {
            path: path.display().to_string(),
            source,
        })?;
        let index = Self::from_json(&json)?;
        tracing::info!(
            "Loaded search index from {} ({} documents) in {:?}",
            path.display(),
            index.documents.len(),
            start.elapsed()
        );
        Ok(index)
    }

    /// Executes a query and returns ranked hits.
    ///
    /// Each query token is lower-cased and stemmed, then looked up in the
    /// term table. Scores are boost-weighted term frequencies summed per
    /// document. In [`BoolMode::And`] a document must match every distinct
    /// token. Hits with an empty body are dropped. Every remaining hit is
    /// returned; capping the display is the caller's concern, so headers
    /// can report the full count. Ordering is deterministic: score
    /// descending, tied documents in index order.
    pub fn search<S: Stem + ?Sized>(
        &self,
        query: &str,
        options: &SearchOptions,
        stemmer: &S,
    ) -> Vec<SearchHit> {
        let mut tokens: Vec<String> = Vec::new();
        let mut seen: AHashSet<String> = AHashSet::new();
        for term in query.split_whitespace() {
            let stemmed = stemmer.stem(&term.to_lowercase());
            if seen.insert(stemmed.clone()) {
                tokens.push(stemmed);
            }
        }

        if tokens.is_empty() {
            return vec![];
        }

        // Accumulate (score, matched token count) per document.
        let mut combined: AHashMap<usize, (f32, usize)> = AHashMap::new();

        for token in &tokens {
            if let Some(postings) = self.terms.get(token) {
                for posting in postings {
                    let score = posting.title_freq as f32 * options.title_boost
                        + posting.body_freq as f32 * options.body_boost;
                    let entry = combined.entry(posting.doc).or_insert((0.0, 0));
                    entry.0 += score;
                    entry.1 += 1;
                }
            }
        }

        let mut scored: Vec<(usize, f32)> = combined
            .into_iter()
            .filter(|(_, (_, matched))| match options.bool_mode {
                BoolMode::And => *matched == tokens.len(),
                BoolMode::Or => true,
            })
            .map(|(doc, (score, _))| (doc, score))
            .collect();

        scored.sort_by(|(doc_a, score_a), (doc_b, score_b)| {
            score_b.total_cmp(score_a).then(doc_a.cmp(doc_b))
        });

        let hits: Vec<SearchHit> = scored
            .into_iter()
            .filter_map(|(doc_idx, score)| {
                let indexed = self.documents.get(doc_idx)?;
                if indexed.doc.body.is_empty() {
                    return None;
                }
                Some(SearchHit {
                    reference: indexed.reference.clone(),
                    doc: indexed.doc.clone(),
                    score,
                })
            })
            .collect();

        tracing::debug!("Query '{}' matched {} document(s)", query, hits.len());
        hits
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}
