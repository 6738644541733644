//! Teaser extraction: the most relevant excerpt of a document body.
//!
//! The strategy is as follows. First, assign a value to each word in the
//! document:
//! - words whose stem starts with a stemmed search term: 40
//! - first word of a sentence: 8
//! - every other word: 2
//!
//! Then slide a fixed-size window over the words, summing the values inside,
//! and keep the best-scoring window. Matched words are wrapped in `<b>` and
//! the excerpt ends with an ellipsis.

use crate::stem::Stem;

/// Weight of a word whose stem starts with a stemmed query term.
const TERM_WEIGHT: u32 = 40;
/// Weight of an ordinary word.
const NORMAL_WORD_WEIGHT: u32 = 2;
/// Weight of the first word of a sentence.
const FIRST_WORD_WEIGHT: u32 = 8;
/// Maximum number of words in a teaser.
const TEASER_MAX_WORDS: usize = 30;

/// A word of the lower-cased body together with its weight and the byte
/// offset at which it starts.
struct WeightedWord<'a> {
    text: &'a str,
    weight: u32,
    offset: usize,
}

/// Builds an HTML teaser for `body`: the highest-scoring window of at most
/// 30 words, with words matching `terms` wrapped in `<b>…</b>` and a
/// trailing ellipsis.
///
/// Matching is stemmer-aware and case-insensitive: a word matches when its
/// stem starts with the stem of any lower-cased query term. Text between
/// words is copied from the original body verbatim, so spacing, punctuation
/// and case are preserved. No HTML escaping is performed.
///
/// A body that contains no words is returned unchanged. The function is
/// total: empty bodies, empty term lists and queries with no match in the
/// body all produce a result rather than an error.
pub fn build_teaser<S: Stem + ?Sized>(body: &str, terms: &[String], stemmer: &S) -> String {
    let stemmed_terms: Vec<String> = terms
        .iter()
        .map(|term| stemmer.stem(&term.to_lowercase()))
        .collect();

    let lowered = body.to_lowercase();
    let mut weighted: Vec<WeightedWord<'_>> = Vec::new();
    let mut term_found = false;

    // Offsets are accumulated while splitting rather than searched for, so
    // every split point must account for exactly one separator byte. The
    // sentence delimiter ". " is two bytes: one is charged to the last word
    // of the sentence, the other after the inner loop.
    let mut offset = 0usize;

    for sentence in lowered.split(". ") {
        let mut value = FIRST_WORD_WEIGHT;

        for word in sentence.split(' ') {
            if !word.is_empty() {
                if !stemmed_terms.is_empty() {
                    let stem = stemmer.stem(word);
                    if stemmed_terms.iter().any(|term| stem.starts_with(term.as_str())) {
                        value = TERM_WEIGHT;
                        term_found = true;
                    }
                }
                weighted.push(WeightedWord {
                    text: word,
                    weight: value,
                    offset,
                });
                value = NORMAL_WORD_WEIGHT;
            }

            // ' ', or '.' for the last word of a sentence
            offset += word.len() + 1;
        }

        offset += 1;
    }

    if weighted.is_empty() {
        return body.to_string();
    }

    let window_size = weighted.len().min(TEASER_MAX_WORDS);

    // Rolling sum over all window positions, front to back.
    let mut window_weights = Vec::with_capacity(weighted.len() - window_size + 1);
    let mut cur_sum: u32 = weighted[..window_size].iter().map(|w| w.weight).sum();
    window_weights.push(cur_sum);

    for i in 0..weighted.len() - window_size {
        cur_sum -= weighted[i].weight;
        cur_sum += weighted[i + window_size].weight;
        window_weights.push(cur_sum);
    }

    // Without a term match the leading window is always used. Otherwise the
    // sums are scanned from last to first with a strict comparison, which
    // keeps the last window among those tied for the maximum. Keep the scan
    // backward: a forward scan changes which tied window wins.
    let mut max_index = 0;
    if term_found {
        let mut max_found = 0;
        for (i, &sum) in window_weights.iter().enumerate().rev() {
            if sum > max_found {
                max_found = sum;
                max_index = i;
            }
        }
    }

    let mut teaser = String::new();
    let mut cursor = weighted[max_index].offset;

    for word in &weighted[max_index..max_index + window_size] {
        if cursor < word.offset {
            // text between the previous word and this one
            teaser.push_str(slice_body(body, &lowered, cursor, word.offset));
            cursor = word.offset;
        }

        if word.weight == TERM_WEIGHT {
            teaser.push_str("<b>");
        }
        let end = word.offset + word.text.len();
        teaser.push_str(slice_body(body, &lowered, word.offset, end));
        cursor = end;

        if word.weight == TERM_WEIGHT {
            teaser.push_str("</b>");
        }
    }

    teaser.push('…');
    teaser
}

/// Re-extracts `start..end` from the original body.
///
/// Offsets are computed against the lower-cased body. For the rare
/// characters whose lower-casing changes their byte length the range may not
/// land on a char boundary of the original; the slice then falls back to the
/// lower-cased text, which the offsets are always valid for.
fn slice_body<'a>(original: &'a str, lowered: &'a str, start: usize, end: usize) -> &'a str {
    original
        .get(start..end)
        .or_else(|| lowered.get(start..end))
        .unwrap_or("")
}
