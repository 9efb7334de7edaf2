//! JSON cursor.
//!
//! The body is parsed with `serde_json` and flattened into a token list with
//! precomputed depths, which the cursor then walks one token at a time.

use serde_json::Value;

use super::{UnmarshallerContext, WireFormat};
use crate::error::{CursorPosition, UnmarshallError};
use crate::unmarshall::Unmarshaller;

#[derive(Debug, Clone, PartialEq)]
enum JsonToken {
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    Property(String),
    String(String),
    Number(String),
    Boolean(bool),
    Null,
}

#[derive(Debug, Clone)]
struct Entry {
    token: JsonToken,
    depth: usize,
    path: String,
}

/// Cursor over a JSON document.
#[derive(Debug, Clone)]
pub struct JsonUnmarshallerContext {
    entries: Vec<Entry>,
    /// Index of the current token; `None` before the first read.
    cursor: Option<usize>,
}

impl JsonUnmarshallerContext {
    /// Parse a JSON body. An empty or blank body yields an empty document.
    pub fn new(body: &[u8]) -> Result<Self, UnmarshallError> {
        let mut entries = Vec::new();
        if !body.iter().all(u8::is_ascii_whitespace) {
            let value: Value = serde_json::from_slice(body)?;
            flatten(&value, 1, "", &mut entries);
        }
        Ok(Self {
            entries,
            cursor: None,
        })
    }

    /// Whether the document has no tokens at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name of the current property token.
    #[must_use]
    pub fn current_property_name(&self) -> Option<&str> {
        match self.current().map(|e| &e.token) {
            Some(JsonToken::Property(name)) => Some(name),
            _ => None,
        }
    }

    /// Whether the current token opens an object.
    #[must_use]
    pub fn is_object_start(&self) -> bool {
        matches!(self.current().map(|e| &e.token), Some(JsonToken::ObjectStart))
    }

    /// Whether the current token opens an array.
    #[must_use]
    pub fn is_array_start(&self) -> bool {
        matches!(self.current().map(|e| &e.token), Some(JsonToken::ArrayStart))
    }

    fn current(&self) -> Option<&Entry> {
        self.cursor.and_then(|i| self.entries.get(i))
    }
}

fn flatten(value: &Value, depth: usize, path: &str, out: &mut Vec<Entry>) {
    let push = |out: &mut Vec<Entry>, token: JsonToken, depth: usize| {
        out.push(Entry {
            token,
            depth,
            path: path.to_owned(),
        });
    };

    match value {
        Value::Object(map) => {
            push(out, JsonToken::ObjectStart, depth);
            for (name, member) in map {
                let member_path = format!("{path}/{name}");
                out.push(Entry {
                    token: JsonToken::Property(name.clone()),
                    depth: depth + 1,
                    path: member_path.clone(),
                });
                let member_depth = if member.is_object() || member.is_array() {
                    depth + 2
                } else {
                    depth + 1
                };
                flatten(member, member_depth, &member_path, out);
            }
            push(out, JsonToken::ObjectEnd, depth);
        }
        Value::Array(items) => {
            push(out, JsonToken::ArrayStart, depth);
            for (index, item) in items.iter().enumerate() {
                flatten(item, depth + 1, &format!("{path}/{index}"), out);
            }
            push(out, JsonToken::ArrayEnd, depth);
        }
        Value::String(s) => push(out, JsonToken::String(s.clone()), depth),
        Value::Number(n) => push(out, JsonToken::Number(n.to_string()), depth),
        Value::Bool(b) => push(out, JsonToken::Boolean(*b), depth),
        Value::Null => push(out, JsonToken::Null, depth),
    }
}

impl UnmarshallerContext for JsonUnmarshallerContext {
    fn format(&self) -> WireFormat {
        WireFormat::Json
    }

    fn read(&mut self) -> Result<bool, UnmarshallError> {
        let next = self.cursor.map_or(0, |i| i + 1);
        self.cursor = Some(next.min(self.entries.len()));
        Ok(next < self.entries.len())
    }

    fn current_depth(&self) -> usize {
        self.current().map_or(0, |e| e.depth)
    }

    fn test_expression(&self, name: &str, depth: usize) -> bool {
        self.current().is_some_and(|e| {
            e.depth == depth && matches!(&e.token, JsonToken::Property(n) if n == name)
        })
    }

    fn is_start_element(&self) -> bool {
        self.current_property_name().is_some()
    }

    fn is_end_element(&self) -> bool {
        matches!(
            self.current().map(|e| &e.token),
            Some(JsonToken::ObjectEnd | JsonToken::ArrayEnd)
        )
    }

    fn is_attribute(&self) -> bool {
        false
    }

    fn is_start_of_document(&self) -> bool {
        self.cursor.is_none()
    }

    fn is_null(&self) -> bool {
        matches!(self.current().map(|e| &e.token), Some(JsonToken::Null))
    }

    fn read_text(&mut self) -> Result<Option<String>, UnmarshallError> {
        match self.current().map(|e| &e.token) {
            Some(JsonToken::String(s) | JsonToken::Number(s)) => Ok(Some(s.clone())),
            Some(JsonToken::Boolean(b)) => Ok(Some(b.to_string())),
            Some(JsonToken::Null) => Ok(None),
            None => Err(UnmarshallError::UnexpectedEof(self.position())),
            Some(_) => Err(self.deserialization_error("scalar", "expected a scalar value")),
        }
    }

    fn enter_value(&mut self) -> Result<(), UnmarshallError> {
        if self.read()? {
            Ok(())
        } else {
            Err(UnmarshallError::UnexpectedEof(self.position()))
        }
    }

    fn expect_structure(&self, target_type: &'static str) -> Result<(), UnmarshallError> {
        if self.is_start_of_document() || self.is_object_start() {
            Ok(())
        } else {
            Err(self.deserialization_error(target_type, "expected a JSON object"))
        }
    }

    fn position(&self) -> CursorPosition {
        match self.current() {
            Some(entry) => CursorPosition {
                depth: entry.depth,
                path: entry.path.clone(),
                token: describe(&entry.token),
            },
            None if self.cursor.is_none() => CursorPosition {
                depth: 0,
                path: String::new(),
                token: "start of document".to_owned(),
            },
            None => CursorPosition {
                depth: 0,
                path: String::new(),
                token: "end of document".to_owned(),
            },
        }
    }

    fn unmarshall<T, U>(&mut self, unmarshaller: &U) -> Result<Option<T>, UnmarshallError>
    where
        U: Unmarshaller<T> + ?Sized,
    {
        unmarshaller.unmarshall_json(self)
    }
}

fn describe(token: &JsonToken) -> String {
    match token {
        JsonToken::ObjectStart => "{".to_owned(),
        JsonToken::ObjectEnd => "}".to_owned(),
        JsonToken::ArrayStart => "[".to_owned(),
        JsonToken::ArrayEnd => "]".to_owned(),
        JsonToken::Property(name) => format!("property {name:?}"),
        JsonToken::String(s) => format!("string {s:?}"),
        JsonToken::Number(n) => format!("number {n}"),
        JsonToken::Boolean(b) => format!("boolean {b}"),
        JsonToken::Null => "null".to_owned(),
    }
}
