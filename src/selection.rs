//! Selection scoping for the copy handler.
//!
//! Citation formatting only activates when the selection is anchored inside
//! an excerpts container. The container lookup is a plain upward walk over a
//! parent-link abstraction, so any host node tree can participate by
//! implementing [`ParentLink`].

use crate::citation::{format_citation, Layout};

/// Class name marking the structural scope that enables citation formatting.
pub const EXCERPTS_CLASS: &str = "excerpts";

/// Minimal capability a host node needs: a parent link and class membership.
pub trait ParentLink {
    /// The node's structural parent, or `None` at the root.
    fn parent(&self) -> Option<&Self>;

    /// Whether the node carries the given class/role tag.
    fn has_class(&self, class: &str) -> bool;
}

/// A text selection: the selected text and the node it is anchored on.
pub struct Selection<'a, N: ParentLink> {
    /// Raw selected text, exactly as the host reports it.
    pub text: &'a str,
    /// Node at the selection anchor.
    pub anchor: &'a N,
}

/// Walks up the parent chain looking for an ancestor with the given class.
///
/// The starting node itself is never a candidate; the walk begins at its
/// parent and stops at the first match or when the chain is exhausted.
pub fn find_ancestor<'a, N: ParentLink>(node: &'a N, class: &str) -> Option<&'a N> {
    let mut current = node.parent();
    while let Some(candidate) = current {
        if candidate.has_class(class) {
            return Some(candidate);
        }
        current = candidate.parent();
    }
    None
}

/// Builds the clipboard payload for a copy event, or declines.
///
/// Returns `None` when the selection anchor has no `excerpts` ancestor; the
/// caller must then leave the platform's default copy behavior intact. When
/// the scope check passes, the payload is [`format_citation`] applied to the
/// selected text, the heading the caller read next to the container, and the
/// page layout.
pub fn clipboard_citation<N: ParentLink>(
    selection: &Selection<'_, N>,
    heading: &str,
    layout: Layout,
) -> Option<String> {
    find_ancestor(selection.anchor, EXCERPTS_CLASS)?;
    Some(format_citation(selection.text, heading, layout))
}
