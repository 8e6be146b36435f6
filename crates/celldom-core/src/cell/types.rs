//! Cell classification types and encoding codes

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name of the type attribute on a cell node
pub const TYPE_ATTR: &str = "t";

/// Name of the value child node
pub const VALUE_NODE: &str = "v";

/// Whitespace-preservation attribute on the value node
pub const SPACE_ATTR: &str = "xml:space";

/// Whitespace marker: consumers may collapse whitespace
pub const SPACE_DEFAULT: &str = "default";

/// Whitespace marker: literal leading/trailing whitespace is significant
pub const SPACE_PRESERVE: &str = "preserve";

/// Type code for boolean cells
pub const CODE_BOOLEAN: &str = "b";

/// Type code for shared-string cells (value text is a table index)
pub const CODE_SHARED_STRING: &str = "s";

/// Type code for ordinary string cells (value text is the string)
pub const CODE_STRING: &str = "str";

/// Type code for inline-string cells
pub const CODE_INLINE_STRING: &str = "inlineStr";

/// Type code for number cells; equivalent to omitting the attribute
pub const CODE_NUMBER: &str = "n";

/// The low-level discriminator the serialized form exposes directly
///
/// Integer vs. float is not part of this classification; both serialize as
/// [`CellType::Number`] and are told apart by the lexical form of the
/// value text (see [`NumberKind`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellType {
    /// No type attribute and no value node
    Empty,
    /// No type attribute (or an empty or "n"-prefixed one) with a value node
    Number,
    /// Type code "b"
    Boolean,
    /// Type code "s", "str", "inlineStr", or any other "s"-prefixed code
    String,
    /// Any other type code
    Error,
}

/// The refined value classification exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueType {
    /// Cell holds no value
    Empty,
    /// Number whose text has integer form
    Integer,
    /// Number whose text has floating-point form
    Float,
    /// Boolean
    Boolean,
    /// String (shared, ordinary, or inline)
    String,
    /// Error code
    Error,
}

impl ValueType {
    /// Lowercase name for error messages
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Empty => "empty",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Boolean => "boolean",
            ValueType::String => "string",
            ValueType::Error => "error",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Numeric sub-kind, inferred from the textual form of a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// No decimal point and no negative exponent in the text
    Integer,
    /// Decimal point or negative exponent present
    Float,
}

impl NumberKind {
    /// Classify numeral text by lexical form alone
    ///
    /// Only the presence of a decimal point or a negative-exponent marker
    /// is examined; magnitude and range are not parsed.
    pub fn classify(text: &str) -> NumberKind {
        if text.contains('.') || text.contains("E-") || text.contains("e-") {
            NumberKind::Float
        } else {
            NumberKind::Integer
        }
    }
}
