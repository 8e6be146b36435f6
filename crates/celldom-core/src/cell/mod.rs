//! Cell value types and DOM-backed access
//!
//! This module contains:
//! - [`CellValue`] - typed view over the value encoded in one cell node
//! - [`CellType`] and [`ValueType`] - the two classification levels
//! - [`ValueSnapshot`] - what node-level copy assignment transfers

mod types;
mod value;

pub use types::{
    CellType, NumberKind, ValueType, CODE_BOOLEAN, CODE_INLINE_STRING, CODE_NUMBER,
    CODE_SHARED_STRING, CODE_STRING, SPACE_ATTR, SPACE_DEFAULT, SPACE_PRESERVE, TYPE_ATTR,
    VALUE_NODE,
};
pub use value::{CellValue, ValueSnapshot};
