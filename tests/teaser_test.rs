use assert2::check;
use booksearch::build_teaser;
use booksearch::stem::english_stemmer;
use rstest::rstest;

// --- Degenerate bodies ---

/// Test: Bodies without any words come back unchanged, for any terms.
#[rstest]
#[case("")]
#[case("     ")]
#[case(". . ")]
fn wordless_bodies_round_trip(#[case] body: &str) {
    let stemmer = english_stemmer();
    check!(build_teaser(body, &[], &stemmer) == body);
    check!(build_teaser(body, &["rust".to_string()], &stemmer) == body);
}

// --- Highlighting ---

/// Test: The documented scenario: both occurrences of "Rust" highlighted
/// with original case, intervening text intact, trailing ellipsis.
#[test]
fn rust_is_fast_scenario() {
    let teaser = build_teaser(
        "Rust is fast. Rust is safe.",
        &["rust".to_string()],
        &english_stemmer(),
    );
    check!(teaser == "<b>Rust</b> is fast. <b>Rust</b> is safe.…");
}

/// Test: Matching is case-insensitive and stem-prefix based; unrelated
/// words are never wrapped.
#[test]
fn quick_fox_scenario() {
    let teaser = build_teaser(
        "The Quick fox jumps. The quick FOX runs fast.",
        &["quick".to_string()],
        &english_stemmer(),
    );
    check!(teaser.matches("<b>").count() == 2);
    check!(teaser.contains("<b>Quick</b>"));
    check!(teaser.contains("<b>quick</b>"));
    check!(!teaser.contains("FOX</b>"));
}

/// Test: With no terms the output carries no markup at all.
#[test]
fn empty_terms_emit_no_markup() {
    let body = "Pattern matching works on enums. Enums model alternatives.";
    let teaser = build_teaser(body, &[], &english_stemmer());
    check!(!teaser.contains('<'));
    check!(teaser == format!("{body}…"));
}

// --- Window selection ---

/// Test: Without a match anywhere the window always starts at the first word.
#[rstest]
#[case("zzzznomatch")]
#[case("qqqq")]
fn unmatched_terms_fall_back_to_the_start(#[case] term: &str) {
    let words: Vec<String> = (0..80).map(|i| format!("word{i}")).collect();
    let body = words.join(" ");
    let teaser = build_teaser(&body, &[term.to_string()], &english_stemmer());

    check!(teaser.starts_with("word0 "));
    check!(!teaser.contains("<b>"));
}

/// Test: A matched term deep in the body pulls the window away from the
/// start and the match is highlighted.
#[test]
fn matched_window_moves_to_the_term() {
    let mut words: Vec<String> = (0..60).map(|i| format!("word{i}")).collect();
    words.push("lifetime".to_string());
    let body = words.join(" ");

    let teaser = build_teaser(&body, &["lifetime".to_string()], &english_stemmer());

    check!(!teaser.starts_with("word0"));
    check!(teaser.contains("<b>lifetime</b>"));
}

// --- Offset fidelity ---

/// Test: Stripping the markup and the ellipsis leaves a contiguous slice of
/// the original body, character for character.
#[rstest]
#[case("Slices borrow part of a collection. Vectors own their elements. \
        Strings are UTF-8 encoded. Iterators are lazy and composable.",
       "vectors")]
#[case("Cargo builds projects,  resolves dependencies, and runs tests.",
       "cargo")]
fn emitted_text_is_contiguous(#[case] body: &str, #[case] term: &str) {
    let teaser = build_teaser(body, &[term.to_string()], &english_stemmer());

    let stripped = teaser.replace("<b>", "").replace("</b>", "");
    let stripped = stripped.trim_end_matches('…');
    check!(body.contains(stripped));
}

/// Test: A short body survives whole, in original order and spacing.
#[test]
fn short_bodies_are_kept_verbatim() {
    let body = "Modules organize code.  Paths name items inside modules.";
    let teaser = build_teaser(body, &["modules".to_string()], &english_stemmer());

    let stripped = teaser.replace("<b>", "").replace("</b>", "");
    check!(stripped == format!("{body}…"));
}
