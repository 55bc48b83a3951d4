//! Citation formatter.
//!
//! Turns a selected excerpt plus its heading into a single quoted clipboard
//! payload. Paragraphs are separated by runs of two-or-more newlines; the
//! quoting style around them depends on the page layout.

use regex::Regex;

/// Citation punctuation style, selected by a page-level setting.
///
/// The hosting page fixes the mode before any event fires; handlers pass it
/// in as an argument rather than reading ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Roomy layout: one quote pair around the whole excerpt, paragraph
    /// breaks kept inside the quotes.
    Readable,
    /// Compact layout: each paragraph individually quoted and bulleted.
    Condensed,
}

/// Formats a selected excerpt as a citation.
///
/// The selection is trimmed and runs of two-or-more spaces collapse to one;
/// newlines are left untouched. A selection without a paragraph break is
/// wrapped in a single quote pair in either layout. With paragraph breaks,
/// readable layout keeps the single quote pair while condensed layout renders
/// each paragraph as `• "<paragraph>"`, joined by the exact newline runs from
/// the selection so blank-line spacing survives. The heading lands on the
/// final line after an em-dash, with no space between them and no trailing
/// newline.
///
/// # Examples
///
/// ```
/// use excerpt_tools::{format_citation, Layout};
///
/// assert_eq!(
///     format_citation("hello   world", "John 3:16", Layout::Readable),
///     "\"hello world\"\n—John 3:16"
/// );
/// assert_eq!(
///     format_citation("Para one.\n\nPara two.", "Gen 1:1", Layout::Condensed),
///     "• \"Para one.\"\n\n• \"Para two.\"\n—Gen 1:1"
/// );
/// ```
pub fn format_citation(selection: &str, heading: &str, layout: Layout) -> String {
    let spaces = Regex::new(r" {2,}").unwrap();
    let text = spaces.replace_all(selection.trim(), " ").into_owned();

    let body = if !text.contains("\n\n") {
        format!("\"{text}\"")
    } else {
        match layout {
            Layout::Readable => format!("\"{text}\""),
            Layout::Condensed => {
                let breaks = Regex::new(r"(\n{2,})").unwrap();
                format!("• \"{}\"", breaks.replace_all(&text, "\"${1}• \""))
            }
        }
    };

    format!("{body}\n—{heading}")
}
