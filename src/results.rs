//! Rendering of ranked search hits into display records.

use crate::search::SearchHit;
use crate::stem::Stem;
use crate::teaser::build_teaser;

/// Default number of result items rendered. The header still reports the
/// full hit count.
pub const MAX_ITEMS: usize = 10;

/// A search hit prepared for display: a link plus a highlighted excerpt.
#[derive(Debug, Clone)]
pub struct ResultItem {
    /// Link to the matching page.
    pub reference: String,
    /// Page title.
    pub title: String,
    /// HTML teaser with matched words wrapped in `<b>…</b>`.
    pub teaser: String,
}

impl ResultItem {
    /// Render the item as a search-results list entry.
    pub fn to_html(&self) -> String {
        format!(
            "<li class=\"search-results__item\"><a href=\"{}\">{}</a>\
             <div class=\"search-results__teaser\">{}</div></li>",
            self.reference, self.title, self.teaser
        )
    }
}

/// Pairs a hit's link with a teaser built from its body.
pub fn format_result_item<S: Stem + ?Sized>(
    hit: &SearchHit,
    terms: &[String],
    stemmer: &S,
) -> ResultItem {
    ResultItem {
        reference: hit.reference.clone(),
        title: hit.doc.title.clone(),
        teaser: build_teaser(&hit.doc.body, terms, stemmer),
    }
}

/// Header line shown above the result list.
pub fn results_header(total: usize, query: &str) -> String {
    if total == 0 {
        format!("No search results for '{query}'.")
    } else {
        format!("{total} search results for '{query}':")
    }
}

/// Renders the whole result view as HTML: the header counting every hit,
/// followed by at most `max_items` list entries.
pub fn render_results<S: Stem + ?Sized>(
    hits: &[SearchHit],
    query: &str,
    terms: &[String],
    stemmer: &S,
    max_items: usize,
) -> String {
    let mut out = results_header(hits.len(), query);
    for hit in hits.iter().take(max_items) {
        out.push('\n');
        out.push_str(&format_result_item(hit, terms, stemmer).to_html());
    }
    out
}
