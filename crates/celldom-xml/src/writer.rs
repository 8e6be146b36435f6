//! XML fragment writing

use celldom_core::Element;
use celldom_core::StructuredNode;

/// Serialize an element tree to XML text
///
/// Attributes emit in insertion order; elements with no text and no
/// children emit as self-closing tags. Text and attribute values are
/// escaped, so the output parses back with
/// [`read_fragment`](crate::read_fragment).
pub fn write_fragment(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.name());
    for (key, value) in element.attributes() {
        out.push_str(&format!(" {}=\"{}\"", key, escape_xml(value)));
    }

    if element.text().is_empty() && element.children().next().is_none() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if !element.text().is_empty() {
        out.push_str(&escape_xml(element.text()));
    }
    for child in element.children() {
        write_element(out, child);
    }
    out.push_str(&format!("</{}>", element.name()));
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
