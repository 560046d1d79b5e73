//! Decoding loosely-typed documents into model types.
//!
//! The document store enforces no schema, so anything read from it may be
//! malformed or missing. Required fields fail with a `DecodeError`; lists
//! are read leniently, dropping elements that do not have the expected
//! shape (schema-on-read).

pub mod grid;
pub mod guess;

use serde_json::{Map, Value};

use crate::core::Timestamp;
use crate::error::DecodeError;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A document as read from the store.
pub type Document = Map<String, Value>;

/// View `value` as a document.
pub fn as_document(value: &Value) -> Result<&Document, DecodeError> {
    value.as_object().ok_or(DecodeError::NotADocument)
}

/// A present, non-null field.
fn field<'a>(doc: &'a Document, key: &str) -> Option<&'a Value> {
    doc.get(key).filter(|value| !value.is_null())
}

/// A required string field.
pub fn string(doc: &Document, key: &'static str) -> Result<String, DecodeError> {
    optional_string(doc, key)?.ok_or(DecodeError::MissingField(key))
}

/// An optional string field; null and absent both read as `None`.
pub fn optional_string(doc: &Document, key: &'static str) -> Result<Option<String>, DecodeError> {
    match field(doc, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DecodeError::WrongType {
            field: key,
            expected: "a string",
        }),
    }
}

/// A required non-negative integer field.
pub fn unsigned(doc: &Document, key: &'static str) -> Result<u64, DecodeError> {
    field(doc, key)
        .ok_or(DecodeError::MissingField(key))?
        .as_u64()
        .ok_or(DecodeError::WrongType {
            field: key,
            expected: "a non-negative integer",
        })
}

/// Read a timestamp value: `{seconds, nanoseconds}`, also accepting the
/// underscore-prefixed names some SDKs emit.
///
/// Nanoseconds must be below one second; nothing is carried.
pub fn parse_timestamp(value: &Value) -> Option<Timestamp> {
    let doc = value.as_object()?;
    let seconds = doc.get("seconds").or_else(|| doc.get("_seconds"))?.as_i64()?;
    let nanoseconds = match doc.get("nanoseconds").or_else(|| doc.get("_nanoseconds")) {
        None => 0,
        Some(nanos) => u32::try_from(nanos.as_u64()?).ok()?,
    };
    if nanoseconds >= NANOS_PER_SECOND {
        return None;
    }
    Some(Timestamp::new(seconds, nanoseconds))
}

/// A required timestamp field.
pub fn timestamp(doc: &Document, key: &'static str) -> Result<Timestamp, DecodeError> {
    optional_timestamp(doc, key)?.ok_or(DecodeError::MissingField(key))
}

/// An optional timestamp field.
pub fn optional_timestamp(doc: &Document, key: &'static str) -> Result<Option<Timestamp>, DecodeError> {
    match field(doc, key) {
        None => Ok(None),
        Some(value) => parse_timestamp(value).map(Some).ok_or(DecodeError::WrongType {
            field: key,
            expected: "a timestamp",
        }),
    }
}

/// Elements of a list field that `element` accepts.
///
/// A missing or non-list field reads as an empty list.
pub fn list_of<T>(doc: &Document, key: &str, element: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    field(doc, key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(element).collect())
        .unwrap_or_default()
}
