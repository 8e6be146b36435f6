//! XML fragment reading
//!
//! Parses a single-rooted XML fragment into an [`Element`] tree carrying
//! names, attributes, text, and child order.

use celldom_core::{Element, StructuredNode};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{XmlError, XmlResult};

/// Parse an XML fragment holding exactly one root element
///
/// Text and attribute values are unescaped. The reader does not trim
/// text, so significant leading/trailing whitespace in value content
/// survives; indented markup therefore lands in element text verbatim,
/// and fragments are expected in compact form. Comments and XML
/// declarations are skipped.
pub fn read_fragment(input: &str) -> XmlResult<Element> {
    let mut reader = Reader::from_str(input);
    reader.trim_text(false);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(element_from_start(&e)?),
            Event::Empty(e) => {
                let el = element_from_start(&e)?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::End(_) => {
                let el = stack
                    .pop()
                    .ok_or_else(|| XmlError::Malformed("unmatched end tag".to_string()))?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                append_text(&mut stack, &text)?;
            }
            Event::CData(e) => {
                let bytes = e.into_inner();
                let text = String::from_utf8_lossy(&bytes);
                append_text(&mut stack, &text)?;
            }
            Event::Comment(_) | Event::Decl(_) => {}
            Event::PI(_) | Event::DocType(_) => {
                log::warn!("skipping markup the element model does not carry");
            }
            Event::Eof => break,
        }
    }

    if !stack.is_empty() {
        return Err(XmlError::Malformed("unclosed element".to_string()));
    }
    root.ok_or_else(|| XmlError::Malformed("no root element".to_string()))
}

fn element_from_start(e: &BytesStart<'_>) -> XmlResult<Element> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut el = Element::new(name);
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?;
        el.set_attribute(&key, &value);
    }
    Ok(el)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, el: Element) -> XmlResult<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_child(el);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(el);
            Ok(())
        }
        None => Err(XmlError::Malformed("multiple root elements".to_string())),
    }
}

fn append_text(stack: &mut [Element], text: &str) -> XmlResult<()> {
    match stack.last_mut() {
        Some(current) => {
            let mut combined = current.text().to_string();
            combined.push_str(text);
            current.set_text(&combined);
            Ok(())
        }
        // Inter-element whitespace outside the root is harmless
        None if text.trim().is_empty() => Ok(()),
        None => Err(XmlError::Malformed(
            "text outside the root element".to_string(),
        )),
    }
}
