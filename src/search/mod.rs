//! Client-side full-text search over a pre-built inverted index.
//!
//! The index is produced ahead of time by the site generator and shipped as
//! JSON; this module only loads and queries it.

pub(crate) mod index;
pub(crate) mod query;

pub use index::{Document, LoadError, SearchHit, SearchIndex};
pub use query::{BoolMode, SearchOptions, parse_query};
