//! XML cursor over a `quick-xml` event stream.

use std::collections::VecDeque;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::{UnmarshallerContext, WireFormat};
use crate::error::{CursorPosition, UnmarshallError};
use crate::unmarshall::Unmarshaller;

#[derive(Debug, Clone, PartialEq, Eq)]
enum XmlToken {
    StartOfDocument,
    Start(String),
    End(String),
    Attribute { name: String, value: String },
    EndOfDocument,
}

/// Streaming cursor over an XML document.
///
/// Only element starts, element ends and attributes are tokens; text is
/// consumed by [`read_text`](UnmarshallerContext::read_text). Namespace
/// prefixes are stripped from names and `xmlns` declarations are skipped.
pub struct XmlUnmarshallerContext<'a> {
    reader: Reader<&'a [u8]>,
    path: Vec<String>,
    token: XmlToken,
    depth: usize,
    pending_pop: bool,
    attributes: VecDeque<(String, String)>,
}

impl std::fmt::Debug for XmlUnmarshallerContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XmlUnmarshallerContext")
            .field("path", &self.path)
            .field("token", &self.token)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

impl<'a> XmlUnmarshallerContext<'a> {
    /// Create a cursor positioned before the first token.
    #[must_use]
    pub fn new(xml: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            path: Vec::new(),
            token: XmlToken::StartOfDocument,
            depth: 0,
            pending_pop: false,
            attributes: VecDeque::new(),
        }
    }

    /// Local name of the current element or attribute.
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        match &self.token {
            XmlToken::Start(name) | XmlToken::End(name) => Some(name),
            XmlToken::Attribute { name, .. } => Some(name),
            XmlToken::StartOfDocument | XmlToken::EndOfDocument => None,
        }
    }

    fn apply_pending_pop(&mut self) {
        if self.pending_pop {
            self.path.pop();
            self.pending_pop = false;
        }
    }

    fn start_element(&mut self, start: &BytesStart<'_>) -> Result<(), UnmarshallError> {
        let name = utf8(start.local_name().as_ref())?.to_owned();
        self.attributes.clear();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| UnmarshallError::Malformed(e.to_string()))?;
            let key = attr.key.as_ref();
            if key == b"xmlns" || key.starts_with(b"xmlns:") {
                continue;
            }
            let attr_name = utf8(attr.key.local_name().as_ref())?.to_owned();
            let raw = utf8(&attr.value)?;
            let value = quick_xml::escape::unescape(raw)
                .map_err(|e| UnmarshallError::Malformed(e.to_string()))?
                .into_owned();
            self.attributes.push_back((attr_name, value));
        }
        self.path.push(name.clone());
        self.depth = self.path.len();
        self.token = XmlToken::Start(name);
        Ok(())
    }

    fn end_element(&mut self) {
        let name = self.path.last().cloned().unwrap_or_default();
        self.depth = self.path.len();
        self.token = XmlToken::End(name);
        self.pending_pop = true;
    }

    fn collect_text(&mut self) -> Result<String, UnmarshallError> {
        let mut text = String::new();
        loop {
            match self.reader.read_event()? {
                Event::Text(e) => {
                    let decoded = e
                        .decode()
                        .map_err(|err| UnmarshallError::Malformed(err.to_string()))?;
                    let unescaped = quick_xml::escape::unescape(&decoded)
                        .map_err(|err| UnmarshallError::Malformed(err.to_string()))?;
                    text.push_str(&unescaped);
                }
                Event::CData(e) => text.push_str(utf8(&e.into_inner())?),
                Event::GeneralRef(e) => {
                    if let Some(ch) = e
                        .resolve_char_ref()
                        .map_err(|err| UnmarshallError::Malformed(err.to_string()))?
                    {
                        text.push(ch);
                    } else {
                        let name = e
                            .decode()
                            .map_err(|err| UnmarshallError::Malformed(err.to_string()))?;
                        let resolved = quick_xml::escape::resolve_predefined_entity(&name)
                            .ok_or_else(|| {
                                UnmarshallError::Malformed(format!("unknown entity &{name};"))
                            })?;
                        text.push_str(resolved);
                    }
                }
                Event::Start(_) => {
                    return Err(self.deserialization_error(
                        "text",
                        "found a nested element where a scalar was expected",
                    ));
                }
                Event::End(_) => {
                    self.end_element();
                    return Ok(text);
                }
                Event::Eof => return Err(UnmarshallError::UnexpectedEof(self.position())),
                _ => {}
            }
        }
    }
}

fn utf8(bytes: &[u8]) -> Result<&str, UnmarshallError> {
    std::str::from_utf8(bytes).map_err(|e| UnmarshallError::Malformed(e.to_string()))
}

impl UnmarshallerContext for XmlUnmarshallerContext<'_> {
    fn format(&self) -> WireFormat {
        WireFormat::Xml
    }

    fn read(&mut self) -> Result<bool, UnmarshallError> {
        self.apply_pending_pop();

        if let Some((name, value)) = self.attributes.pop_front() {
            self.depth = self.path.len() + 1;
            self.token = XmlToken::Attribute { name, value };
            return Ok(true);
        }

        loop {
            match self.reader.read_event()? {
                Event::Start(e) => {
                    self.start_element(&e)?;
                    return Ok(true);
                }
                Event::End(_) => {
                    self.end_element();
                    return Ok(true);
                }
                Event::Eof => {
                    self.depth = 0;
                    self.token = XmlToken::EndOfDocument;
                    return Ok(false);
                }
                _ => {}
            }
        }
    }

    fn current_depth(&self) -> usize {
        self.depth
    }

    fn test_expression(&self, name: &str, depth: usize) -> bool {
        self.depth == depth
            && match &self.token {
                XmlToken::Start(n) => n == name,
                XmlToken::Attribute { name: n, .. } => n == name,
                _ => false,
            }
    }

    fn is_start_element(&self) -> bool {
        matches!(self.token, XmlToken::Start(_))
    }

    fn is_end_element(&self) -> bool {
        matches!(self.token, XmlToken::End(_))
    }

    fn is_attribute(&self) -> bool {
        matches!(self.token, XmlToken::Attribute { .. })
    }

    fn is_start_of_document(&self) -> bool {
        self.token == XmlToken::StartOfDocument
    }

    fn is_null(&self) -> bool {
        false
    }

    fn read_text(&mut self) -> Result<Option<String>, UnmarshallError> {
        match &self.token {
            XmlToken::Attribute { value, .. } => Ok(Some(value.clone())),
            XmlToken::Start(_) => {
                self.attributes.clear();
                self.collect_text().map(Some)
            }
            _ => Err(self.deserialization_error("text", "cursor is not on an element or attribute")),
        }
    }

    fn enter_value(&mut self) -> Result<(), UnmarshallError> {
        Ok(())
    }

    fn expect_structure(&self, target_type: &'static str) -> Result<(), UnmarshallError> {
        match self.token {
            XmlToken::StartOfDocument | XmlToken::Start(_) => Ok(()),
            _ => Err(self.deserialization_error(target_type, "expected an element")),
        }
    }

    fn position(&self) -> CursorPosition {
        let mut path = String::new();
        for segment in &self.path {
            path.push('/');
            path.push_str(segment);
        }
        let token = match &self.token {
            XmlToken::StartOfDocument => "start of document".to_owned(),
            XmlToken::Start(name) => format!("<{name}>"),
            XmlToken::End(name) => format!("</{name}>"),
            XmlToken::Attribute { name, .. } => {
                path.push_str("/@");
                path.push_str(name);
                format!("@{name}")
            }
            XmlToken::EndOfDocument => "end of document".to_owned(),
        };
        CursorPosition {
            depth: self.depth,
            path,
            token,
        }
    }

    fn unmarshall<T, U>(&mut self, unmarshaller: &U) -> Result<Option<T>, UnmarshallError>
    where
        U: Unmarshaller<T> + ?Sized,
    {
        unmarshaller.unmarshall_xml(self)
    }
}
