//! Generic structured-node contract
//!
//! [`CellValue`](crate::CellValue) never touches a concrete document tree.
//! It reads and mutates its owning node through this trait, which any
//! element-like store can implement. The bundled
//! [`Element`](crate::Element) is the reference implementation.

/// Read/write access to a node's named children, attributes, and text.
///
/// Lookup is first-match by name. The `ensure_*` operations create the
/// entity if absent; removing an absent entity is a no-op.
///
/// A node handle is a borrow into an externally owned tree: the borrow
/// checker guarantees the tree outlives the handle and that nothing else
/// mutates it while a `&mut` handle is live.
pub trait StructuredNode {
    /// First child with the given name, if any
    fn child(&self, name: &str) -> Option<&Self>;

    /// First child with the given name, creating it if absent
    fn ensure_child(&mut self, name: &str) -> &mut Self;

    /// Remove the first child with the given name
    fn remove_child(&mut self, name: &str);

    /// Value of the named attribute, if present
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Set the named attribute, creating it if absent
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Remove the named attribute
    fn remove_attribute(&mut self, name: &str);

    /// The node's text content ("" when unset)
    fn text(&self) -> &str;

    /// Replace the node's text content
    fn set_text(&mut self, text: &str);

    /// Whether a child with the given name exists
    fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// Whether the named attribute exists
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Create the named attribute with an empty value if absent
    fn ensure_attribute(&mut self, name: &str) {
        if !self.has_attribute(name) {
            self.set_attribute(name, "");
        }
    }

    /// Text content parsed as a signed integer, 0 if unparseable
    fn text_as_i64(&self) -> i64 {
        self.text().trim().parse().unwrap_or(0)
    }

    /// Text content parsed as a float, 0.0 if unparseable
    fn text_as_f64(&self) -> f64 {
        self.text().trim().parse().unwrap_or(0.0)
    }

    /// Text content parsed as a boolean; only the canonical "1" counts
    fn text_as_bool(&self) -> bool {
        self.text().trim() == "1"
    }

    /// Text content parsed as a non-negative index, 0 if unparseable
    fn text_as_index(&self) -> usize {
        self.text().trim().parse().unwrap_or(0)
    }
}
