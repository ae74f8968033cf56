//! In-memory document
//!
//! Markup is parsed once with `scraper`. Structure (tags, nesting, document order) is
//! fixed at parse time; classes and attributes live in a per-element overlay that the
//! mutation methods update. Selector queries match the markup as parsed, so a class added
//! at runtime shows up in `has_class` but not in `query_all`.

use std::cell::RefCell;
use std::collections::BTreeMap;

use scraper::{ElementRef, Html, Selector};

use crate::document::Document;
use crate::error::DomError;
use crate::Result;

/// Position of an element in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct ElementState {
    tag: String,
    parent: Option<NodeId>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
}

#[derive(Debug)]
pub struct MemoryDocument {
    html: Html,
    elements: RefCell<Vec<ElementState>>,
}

impl MemoryDocument {
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);

        let elements = {
            let nodes: Vec<ElementRef<'_>> = html
                .root_element()
                .descendants()
                .filter_map(ElementRef::wrap)
                .collect();

            nodes
                .iter()
                .map(|el| {
                    let parent = el
                        .parent()
                        .and_then(ElementRef::wrap)
                        .and_then(|p| nodes.iter().position(|n| n.id() == p.id()))
                        .map(NodeId);

                    let attributes = el
                        .value()
                        .attrs()
                        .filter(|(name, _)| *name != "class")
                        .map(|(name, value)| (name.to_string(), value.to_string()))
                        .collect();

                    ElementState {
                        tag: el.value().name().to_string(),
                        parent,
                        classes: el.value().classes().map(str::to_string).collect(),
                        attributes,
                        text: el.text().collect(),
                    }
                })
                .collect::<Vec<_>>()
        };

        tracing::debug!(elements = elements.len(), "Parsed document");

        Self {
            html,
            elements: RefCell::new(elements),
        }
    }

    /// Number of elements in the document
    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lowercase tag name of an element
    pub fn tag(&self, node: &NodeId) -> Option<String> {
        self.elements.borrow().get(node.0).map(|el| el.tag.clone())
    }

    /// Current class list of an element, in insertion order
    pub fn classes(&self, node: &NodeId) -> Vec<String> {
        self.elements
            .borrow()
            .get(node.0)
            .map(|el| el.classes.clone())
            .unwrap_or_default()
    }

    fn elements_in_order(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
    }

    fn position(&self, el: ElementRef<'_>) -> Option<NodeId> {
        self.elements_in_order()
            .position(|candidate| candidate.id() == el.id())
            .map(NodeId)
    }

    fn with_element<T>(&self, node: &NodeId, f: impl FnOnce(&mut ElementState) -> T) -> Option<T> {
        let mut elements = self.elements.borrow_mut();
        let element = elements.get_mut(node.0);
        if element.is_none() {
            tracing::warn!(node = node.0, "Mutation on unknown element ignored");
        }
        element.map(f)
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| DomError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements
            .borrow()
            .iter()
            .position(|el| el.attributes.get("id").map(String::as_str) == Some(id))
            .map(NodeId)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        let selector = parse_selector(selector)?;
        Ok(self
            .html
            .select(&selector)
            .filter_map(|el| self.position(el))
            .collect())
    }

    fn query_within(&self, root: &NodeId, selector: &str) -> Result<Option<NodeId>> {
        let selector = parse_selector(selector)?;
        let Some(root) = self.elements_in_order().nth(root.0) else {
            return Ok(None);
        };
        let found = root.select(&selector).next();
        Ok(found.and_then(|el| self.position(el)))
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.elements.borrow().get(node.0).and_then(|el| el.parent)
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.elements
            .borrow()
            .get(node.0)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        self.with_element(node, |el| {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        });
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.with_element(node, |el| el.classes.retain(|c| c != class));
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let elements = self.elements.borrow();
        let el = elements.get(node.0)?;
        if name == "class" {
            return (!el.classes.is_empty()).then(|| el.classes.join(" "));
        }
        el.attributes.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.with_element(node, |el| {
            if name == "class" {
                el.classes = value.split_whitespace().map(str::to_string).collect();
            } else {
                el.attributes.insert(name.to_string(), value.to_string());
            }
        });
    }

    fn text(&self, node: &NodeId) -> String {
        self.elements
            .borrow()
            .get(node.0)
            .map(|el| el.text.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: &str = r#"
        <html><body>
          <header><img id="logo" src="./images/logo-bookmark.svg" alt="Bookmark"></header>
          <ul>
            <li class="tab" data-target="panel-1"><span class="label">One</span></li>
            <li class="tab" data-target="panel-2"><span class="label">Two</span></li>
          </ul>
          <div class="panel panel-1 flex">first</div>
          <div class="panel panel-2 hidden">second</div>
        </body></html>
    "#;

    #[test]
    fn test_lookup_by_id() {
        let doc = MemoryDocument::parse(MARKUP);
        assert!(!doc.is_empty());
        let logo = doc.element_by_id("logo").unwrap();
        assert_eq!(doc.tag(&logo).as_deref(), Some("img"));
        assert_eq!(
            doc.attribute(&logo, "src").as_deref(),
            Some("./images/logo-bookmark.svg")
        );
        assert!(doc.element_by_id("menu").is_none());
    }

    #[test]
    fn test_require_by_id_names_missing_element() {
        let doc = MemoryDocument::parse(MARKUP);
        let err = doc.require_by_id("menu-btn").unwrap_err();
        assert_eq!(err.to_string(), "Missing element: #menu-btn");
    }

    #[test]
    fn test_query_all_in_document_order() {
        let doc = MemoryDocument::parse(MARKUP);
        let tabs = doc.query_all(".tab").unwrap();
        assert_eq!(tabs.len(), 2);
        assert!(tabs[0] < tabs[1]);
        assert_eq!(
            doc.attribute(&tabs[1], "data-target").as_deref(),
            Some("panel-2")
        );
    }

    #[test]
    fn test_query_within_and_parent() {
        let doc = MemoryDocument::parse(MARKUP);
        let tab = doc.query_all(".tab").unwrap()[0];
        let span = doc.query_within(&tab, "span").unwrap().unwrap();
        assert_eq!(doc.text(&span), "One");
        assert_eq!(doc.parent(&span), Some(tab));
        // The root itself never matches
        assert!(doc.query_within(&tab, ".tab").unwrap().is_none());
    }

    #[test]
    fn test_class_mutations() {
        let doc = MemoryDocument::parse(MARKUP);
        let panel = doc.query_all(".panel-2").unwrap()[0];
        assert!(doc.has_class(&panel, "hidden"));

        doc.remove_class(&panel, "hidden");
        doc.add_class(&panel, "flex");
        doc.add_class(&panel, "flex");

        assert!(!doc.has_class(&panel, "hidden"));
        assert_eq!(doc.classes(&panel), vec!["panel", "panel-2", "flex"]);
        assert_eq!(
            doc.attribute(&panel, "class").as_deref(),
            Some("panel panel-2 flex")
        );
    }

    #[test]
    fn test_set_attribute() {
        let doc = MemoryDocument::parse(MARKUP);
        let logo = doc.element_by_id("logo").unwrap();
        doc.set_attribute(&logo, "src", "./images/logo-bookmark-footer.svg");
        assert_eq!(
            doc.attribute(&logo, "src").as_deref(),
            Some("./images/logo-bookmark-footer.svg")
        );

        doc.set_attribute(&logo, "class", "h-8  w-auto");
        assert!(doc.has_classes(&logo, &["h-8".to_string(), "w-auto".to_string()]));
    }

    #[test]
    fn test_invalid_selector() {
        let doc = MemoryDocument::parse(MARKUP);
        let err = doc.query_all("..tab").unwrap_err();
        assert!(matches!(err, DomError::InvalidSelector { .. }));
    }
}
