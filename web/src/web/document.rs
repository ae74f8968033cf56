use bookmark_core::{Document, DomError};
use wasm_bindgen::JsCast;
use web_sys::Element;

/// The live browser document
#[derive(Debug, Clone)]
pub(super) struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub(super) fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

fn invalid_selector(selector: &str, e: wasm_bindgen::JsValue) -> DomError {
    DomError::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{e:?}"),
    }
}

impl Document for WebDocument {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, DomError> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|e| invalid_selector(selector, e))?;

        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn query_within(
        &self,
        root: &Element,
        selector: &str,
    ) -> Result<Option<Element>, DomError> {
        root.query_selector(selector)
            .map_err(|e| invalid_selector(selector, e))
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().add_1(class) {
            tracing::warn!(class, error = ?e, "classList.add rejected");
        }
    }

    fn remove_class(&self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().remove_1(class) {
            tracing::warn!(class, error = ?e, "classList.remove rejected");
        }
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        if let Err(e) = node.set_attribute(name, value) {
            tracing::warn!(name, error = ?e, "setAttribute rejected");
        }
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }
}
