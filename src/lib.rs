pub mod cli;
pub mod error;
pub mod results;
pub mod search;
pub mod stem;
pub mod teaser;
pub mod tracing;

pub use results::{MAX_ITEMS, ResultItem, format_result_item, render_results, results_header};
pub use search::{BoolMode, Document, SearchHit, SearchIndex, SearchOptions};
pub use stem::{Stem, english_stemmer};
pub use teaser::build_teaser;
