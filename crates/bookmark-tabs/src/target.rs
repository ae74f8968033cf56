//! Event target resolution
//!
//! A click on a tab lands either on the tab itself or on the label inside it, and only
//! the tab carries the feature id.

use bookmark_dom::Document;

/// Resolve the feature id an interaction refers to.
///
/// Lookup order: `attribute` on `target`, then on its immediate parent. Empty values
/// count as absent. No further ancestors are consulted.
pub fn resolve_target<D: Document>(doc: &D, target: &D::Node, attribute: &str) -> Option<String> {
    let read = |node: &D::Node| doc.attribute(node, attribute).filter(|id| !id.is_empty());

    read(target).or_else(|| doc.parent(target).and_then(|parent| read(&parent)))
}
