//! Stemming seam between the teaser builder, the query layer and the
//! concrete stemmer implementation.
//!
//! The stemmer is passed in explicitly rather than resolved from ambient
//! state, so tests can substitute a fake (a plain `fn(&str) -> String`
//! works).

use rust_stemmers::{Algorithm, Stemmer};

/// A word stemmer. Input is expected to be lower-cased by the caller;
/// implementations must be deterministic and total over any string.
pub trait Stem {
    /// Reduce a word to its stem.
    fn stem(&self, word: &str) -> String;
}

impl Stem for Stemmer {
    fn stem(&self, word: &str) -> String {
        Stemmer::stem(self, word).into_owned()
    }
}

impl Stem for fn(&str) -> String {
    fn stem(&self, word: &str) -> String {
        self(word)
    }
}

/// The English Snowball stemmer used throughout the crate.
pub fn english_stemmer() -> Stemmer {
    Stemmer::create(Algorithm::English)
}
