//! # celldom-core
//!
//! DOM-backed cell values for the celldom library.
//!
//! A spreadsheet cell's value lives in its document node as a pair of
//! constructs: a `v` child node holding text and a `t` attribute holding a
//! type code. The serialized form is ambiguous: a missing attribute means
//! "number", one-letter codes select among five kinds, and integer vs.
//! float is inferred from the text itself. [`CellValue`] binds to one such
//! node and mediates between that form and typed values: classifying on
//! every read, keeping the node/attribute pair self-consistent on every
//! write, and resolving shared strings through a lookup table.
//!
//! - [`CellValue`] - classification, typed accessors, encode rules
//! - [`StructuredNode`] - the document-tree contract the value operates
//!   through, with [`Element`] as the bundled in-memory implementation
//! - [`SharedStrings`] - shared-string resolution, with
//!   [`SharedStringTable`] as the bundled table
//!
//! ## Example
//!
//! ```rust
//! use celldom_core::{CellValue, Element, SharedStringTable, ValueType};
//!
//! let mut table = SharedStringTable::new();
//! table.add("Hello");
//!
//! let mut node = Element::new("c");
//! let mut value = CellValue::new(&mut node, &table);
//!
//! value.set_integer(42);
//! assert_eq!(value.value_type(), ValueType::Integer);
//! assert_eq!(value.as_integer().unwrap(), 42);
//!
//! value.set_string("plain text");
//! assert_eq!(value.as_string().unwrap(), "plain text");
//! ```

pub mod cell;
pub mod element;
pub mod error;
pub mod node;
pub mod strings;

// Re-exports for convenience
pub use cell::{CellType, CellValue, NumberKind, ValueSnapshot, ValueType};
pub use element::Element;
pub use error::{Error, Result};
pub use node::StructuredNode;
pub use strings::{SharedStringTable, SharedStrings};
