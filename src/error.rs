//! Error handling types.

/// A specialized Result type for booksearch operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()`
/// where the error surfaces to the CLI. Library-level failures use the typed
/// [`LoadError`](crate::search::LoadError).
pub type Result<T> = anyhow::Result<T>;
