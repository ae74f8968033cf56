//! Host document trait

use std::fmt::Debug;

use crate::error::DomError;
use crate::Result;

/// The slice of a document object model the page controllers consume.
///
/// Mutations are infallible from the caller's point of view: class names and attribute
/// names come from validated configuration, and a host that still rejects one logs it.
pub trait Document {
    /// Handle to an element owned by the host
    type Node: Clone + Debug + PartialEq;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Node>>;

    /// First descendant of `root` (excluding `root` itself) matching `selector`
    fn query_within(&self, root: &Self::Node, selector: &str) -> Result<Option<Self::Node>>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    /// Concatenated text content of the element and its descendants
    fn text(&self, node: &Self::Node) -> String;

    /// Lookup by id that fails with a diagnostic naming the missing element
    fn require_by_id(&self, id: &str) -> Result<Self::Node> {
        self.element_by_id(id)
            .ok_or_else(|| DomError::MissingElement(format!("#{id}")))
    }

    fn add_classes(&self, node: &Self::Node, classes: &[String]) {
        for class in classes {
            self.add_class(node, class);
        }
    }

    fn remove_classes(&self, node: &Self::Node, classes: &[String]) {
        for class in classes {
            self.remove_class(node, class);
        }
    }

    /// True when every class in `classes` is present on `node`
    fn has_classes(&self, node: &Self::Node, classes: &[String]) -> bool {
        classes.iter().all(|class| self.has_class(node, class))
    }
}
