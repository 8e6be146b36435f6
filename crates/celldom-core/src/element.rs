//! In-memory structured node
//!
//! A minimal element tree: name, insertion-ordered attributes, text
//! content, and ordered children. This is the reference
//! [`StructuredNode`] implementation used by the tests and by the
//! `celldom-xml` fragment adapter; a document store with its own tree can
//! implement the trait directly instead.

use crate::node::StructuredNode;

/// An element in an in-memory document tree
///
/// Attributes keep insertion order so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Create a new element with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// The element's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterate attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate children in document order
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }

    /// Append a child element, returning a handle to it
    pub fn push_child(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }
}

impl StructuredNode for Element {
    fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    fn ensure_child(&mut self, name: &str) -> &mut Self {
        match self.children.iter().position(|c| c.name == name) {
            Some(pos) => &mut self.children[pos],
            None => self.push_child(Element::new(name)),
        }
    }

    fn remove_child(&mut self, name: &str) {
        if let Some(pos) = self.children.iter().position(|c| c.name == name) {
            self.children.remove(pos);
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(k, _)| k != name);
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}
