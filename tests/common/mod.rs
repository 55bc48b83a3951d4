//! Shared test constants and helpers for integration tests.

/// A two-paragraph excerpt used across citation tests.
///
/// Kept as a constant so the CLI tests and the library-level tests exercise
/// the exact same bytes, including the paragraph break width.
pub const TWO_PARAGRAPHS: &str = "Para one.\n\nPara two.";

/// Build a JSON settings document for the given layout flag.
///
/// Only `readable_layout` is set; the remaining fields rely on their serde
/// defaults, which doubles as a partial-file loading test at the CLI level.
pub fn build_settings_json(readable_layout: bool) -> String {
    format!(r#"{{"readable_layout": {}}}"#, readable_layout)
}
