//! Error types for celldom-core

use thiserror::Error;

use crate::cell::ValueType;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when reading a cell value
#[derive(Debug, Error)]
pub enum Error {
    /// A typed getter was invoked against a cell holding a different kind
    #[error("Type mismatch: requested {requested}, cell holds {actual}")]
    TypeMismatch {
        /// The kind the caller asked for
        requested: ValueType,
        /// The kind the cell currently encodes
        actual: ValueType,
    },

    /// A string-classified cell carries a type code the string getter does
    /// not recognize. Classification and the getter must otherwise stay in
    /// lockstep, so this signals an encoding inconsistency rather than a
    /// normal runtime condition.
    #[error("Unknown string type code: {0:?}")]
    UnknownStringType(String),

    /// A shared-string index points past the end of the table
    #[error("Shared string index {index} out of range (table holds {len})")]
    SharedStringOutOfRange {
        /// The index the cell referenced
        index: usize,
        /// Current size of the table
        len: usize,
    },
}
