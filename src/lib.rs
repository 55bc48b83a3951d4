//! excerpt-tools: toggle book filters in search queries and format excerpt citations.
//!
//! This library provides functionality to:
//! - Rewrite a free-text search query to toggle a `book:<abbr>` filter token
//! - Format a selected excerpt plus its heading as a quoted citation
//! - Decide whether a selection is in citation scope via a parent-link walk
//! - Load the page-level settings that drive layout and ordering behavior

pub mod citation;
pub mod query;
pub mod selection;
pub mod settings;

pub use citation::{format_citation, Layout};
pub use query::toggle_book_filter;
pub use selection::{clipboard_citation, find_ancestor, ParentLink, Selection, EXCERPTS_CLASS};
pub use settings::{load_settings, PageSettings};
