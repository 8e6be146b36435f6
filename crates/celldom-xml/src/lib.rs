//! # celldom-xml
//!
//! XML fragment adapter for celldom: parses cell markup into
//! [`celldom_core::Element`] trees and serializes them back.
//!
//! ## Example
//!
//! ```rust
//! use celldom_core::{CellValue, SharedStringTable};
//! use celldom_xml::read_fragment;
//!
//! let table = SharedStringTable::from(vec!["Hello".to_string()]);
//! let mut cell = read_fragment(r#"<c r="A1" t="s"><v>0</v></c>"#).unwrap();
//!
//! let value = CellValue::new(&mut cell, &table);
//! assert_eq!(value.as_string().unwrap(), "Hello");
//! ```

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{XmlError, XmlResult};
pub use reader::read_fragment;
pub use writer::write_fragment;
