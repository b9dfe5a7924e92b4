//! XML to `serde_json::Value` normalization.
//!
//! The full-results XML is attribute-heavy and has no list markers, so it is
//! folded into the same shape the JSON output uses:
//! - attributes become string fields;
//! - a child with neither attributes nor children becomes its trimmed text;
//! - repeated children with the same name become an array;
//! - text next to attributes or children is kept under `$text`.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::escape::unescape;
use serde_json::map::Entry;
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// Key used for character data inside an element that also has fields.
pub const TEXT_KEY: &str = "$text";

struct Frame {
    name: String,
    fields: Map<String, Value>,
    text: String,
}

impl Frame {
    fn open(start: &BytesStart<'_>, position: u64) -> Result<Self, DecodeError> {
        let name = utf8(start.name().as_ref(), position)?.to_owned();
        let mut fields = Map::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|err| DecodeError::xml(position, err))?;
            let key = utf8(attr.key.as_ref(), position)?.to_owned();
            let raw = utf8(&attr.value, position)?;
            let value = unescape(raw).map_err(|err| DecodeError::xml(position, err))?;
            fields.insert(key, Value::String(value.into_owned()));
        }
        Ok(Self {
            name,
            fields,
            text: String::new(),
        })
    }

    fn add_child(&mut self, name: String, value: Value) {
        match self.fields.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Value::Array(items) => items.push(value),
                existing => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            },
        }
    }

    fn close(self) -> (String, Value) {
        let text = self.text.trim().to_owned();
        if self.fields.is_empty() {
            return (self.name, Value::String(text));
        }
        let mut fields = self.fields;
        if !text.is_empty() {
            fields.insert(TEXT_KEY.to_owned(), Value::String(text));
        }
        (self.name, Value::Object(fields))
    }
}

/// Parse a whole document and return its root element as a value.
pub fn parse_document(body: &[u8]) -> Result<(String, Value), DecodeError> {
    let mut reader = Reader::from_reader(body);
    let mut buf = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        let position = reader.buffer_position();
        let event = match reader.read_event_into(&mut buf) {
            Ok(event) => event,
            Err(err) => return Err(DecodeError::xml(reader.buffer_position(), err)),
        };
        let position = u64::try_from(position).unwrap_or(u64::MAX);

        match event {
            Event::Start(start) => stack.push(Frame::open(&start, position)?),
            Event::Empty(start) => {
                let (name, value) = Frame::open(&start, position)?.close();
                attach(&mut stack, &mut root, name, value, position)?;
            }
            Event::End(_) => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| DecodeError::xml(position, "unexpected end tag"))?;
                let (name, value) = frame.close();
                attach(&mut stack, &mut root, name, value, position)?;
            }
            Event::Text(text) => {
                if let Some(frame) = stack.last_mut() {
                    let raw = utf8(&text, position)?;
                    let value = unescape(raw).map_err(|err| DecodeError::xml(position, err))?;
                    frame.text.push_str(&value);
                }
            }
            Event::CData(data) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(utf8(&data, position)?);
                }
            }
            Event::GeneralRef(reference) => {
                if let Some(frame) = stack.last_mut() {
                    let entity = format!("&{};", utf8(&reference, position)?);
                    let value =
                        unescape(&entity).map_err(|err| DecodeError::xml(position, err))?;
                    frame.text.push_str(&value);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(DecodeError::xml(
            reader.buffer_position(),
            format!("unterminated element <{}>", open.name),
        ));
    }
    root.ok_or_else(|| DecodeError::xml(reader.buffer_position(), "document has no root element"))
}

fn attach(
    stack: &mut [Frame],
    root: &mut Option<(String, Value)>,
    name: String,
    value: Value,
    position: u64,
) -> Result<(), DecodeError> {
    if let Some(parent) = stack.last_mut() {
        parent.add_child(name, value);
        return Ok(());
    }
    if root.is_some() {
        return Err(DecodeError::xml(position, "more than one root element"));
    }
    *root = Some((name, value));
    Ok(())
}

fn utf8(bytes: &[u8], position: u64) -> Result<&str, DecodeError> {
    std::str::from_utf8(bytes).map_err(|err| DecodeError::xml(position, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(xml: &str) -> Result<Value, DecodeError> {
        parse_document(xml.as_bytes()).map(|(_, value)| value)
    }

    #[test]
    fn attributes_and_text_children() {
        let value = parse(
            "<?xml version='1.0' encoding='UTF-8'?>\
             <subpod title=''><plaintext>x = 2</plaintext></subpod>",
        )
        .unwrap();
        assert_eq!(value, json!({"title": "", "plaintext": "x = 2"}));
    }

    #[test]
    fn repeated_children_become_arrays() {
        let value = parse("<pod><subpod a='1'/><subpod a='2'/><subpod a='3'/></pod>").unwrap();
        assert_eq!(
            value,
            json!({"subpod": [{"a": "1"}, {"a": "2"}, {"a": "3"}]})
        );
    }

    #[test]
    fn entities_are_resolved_in_text_and_attributes() {
        let value = parse("<e t='a &amp; b'><p>1 &lt; 2 &#x3C; 3</p></e>").unwrap();
        assert_eq!(value, json!({"t": "a & b", "p": "1 < 2 < 3"}));
    }

    #[test]
    fn mixed_text_is_kept_under_text_key() {
        let value = parse("<alternative level='0.4'>weather</alternative>").unwrap();
        assert_eq!(value, json!({"level": "0.4", "$text": "weather"}));
    }

    #[test]
    fn cdata_is_kept_verbatim() {
        let value = parse("<p><![CDATA[a <b> c]]></p>").unwrap();
        assert_eq!(value, json!("a <b> c"));
    }

    #[test]
    fn attribute_and_child_with_same_name_collect_into_array() {
        let value =
            parse("<queryresult error='true'><error><code>1</code></error></queryresult>").unwrap();
        assert_eq!(value, json!({"error": ["true", {"code": "1"}]}));
    }

    #[test]
    fn root_name_is_reported() {
        let (name, _) = parse_document(b"<queryresult success='true'/>").unwrap();
        assert_eq!(name, "queryresult");
    }

    #[test]
    fn unclosed_element_is_an_error() {
        let err = parse("<queryresult><pod title='x'>").unwrap_err();
        assert!(matches!(err, DecodeError::Xml { .. }));
        assert!(err.to_string().contains("unterminated"), "{err}");
    }

    #[test]
    fn unterminated_tag_is_an_error() {
        assert!(parse("<queryresult><pod title='x'").is_err());
    }

    #[test]
    fn mismatched_end_tag_is_an_error() {
        assert!(parse("<pod><subpod></pod></subpod>").is_err());
    }

    #[test]
    fn empty_input_has_no_root() {
        assert!(parse("").is_err());
    }
}
