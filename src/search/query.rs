//! Query parsing and search options.

/// How multiple query terms combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolMode {
    /// A document must match every term.
    And,
    /// A document may match any term.
    Or,
}

/// Options controlling how a query is executed.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Term combination mode.
    pub bool_mode: BoolMode,
    /// Score multiplier for title matches.
    pub title_boost: f32,
    /// Score multiplier for body matches.
    pub body_boost: f32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            bool_mode: BoolMode::And,
            title_boost: 2.0,
            body_boost: 1.0,
        }
    }
}

/// Splits a raw query into the user-facing term list.
///
/// These are the terms handed to the teaser builder, which lower-cases and
/// stems them itself, so they are returned as typed.
pub fn parse_query(query: &str) -> Vec<String> {
    query
        .trim()
        .split(' ')
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}
