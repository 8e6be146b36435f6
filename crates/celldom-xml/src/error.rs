//! XML adapter error types

use thiserror::Error;

/// Result type for XML fragment operations
pub type XmlResult<T> = std::result::Result<T, XmlError>;

/// Errors that can occur while reading XML fragments
#[derive(Debug, Error)]
pub enum XmlError {
    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Attribute error
    #[error("Attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Malformed fragment
    #[error("Malformed fragment: {0}")]
    Malformed(String),
}
