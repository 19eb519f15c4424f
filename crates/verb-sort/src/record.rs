//! Verb records and their sort key
//!
//! A record is an arbitrary JSON object. Only the `kanaStart` and `kanaEnd`
//! fields are interpreted; everything else is carried through untouched,
//! in its original field order.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Field holding the leading kana of a verb
pub const KANA_START: &str = "kanaStart";
/// Field holding the trailing kana (okurigana) of a verb
pub const KANA_END: &str = "kanaEnd";

/// Reasons a JSON value cannot be used as a verb record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordShapeError {
    /// Element of the array is not an object
    #[error("element {index} is {found}, expected an object")]
    NotAnObject {
        /// Position in the input array
        index: usize,
        /// JSON type that was found
        found: &'static str,
    },

    /// A key field is present but does not hold a string
    #[error("element {index} has non-string '{field}' ({found})")]
    NonStringKey {
        /// Position in the input array
        index: usize,
        /// Offending field name
        field: &'static str,
        /// JSON type that was found
        found: &'static str,
    },
}

/// One verb entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VerbRecord(Map<String, Value>);

impl VerbRecord {
    /// Build a record from the `index`-th element of a verb array
    pub fn from_value(index: usize, value: Value) -> Result<Self, RecordShapeError> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(RecordShapeError::NotAnObject {
                    index,
                    found: json_type(&other),
                });
            }
        };

        for field in [KANA_START, KANA_END] {
            match fields.get(field) {
                None | Some(Value::String(_)) => {}
                Some(other) => {
                    return Err(RecordShapeError::NonStringKey {
                        index,
                        field,
                        found: json_type(other),
                    });
                }
            }
        }

        Ok(Self(fields))
    }

    /// Leading kana, or `""` when the field is absent
    pub fn kana_start(&self) -> &str {
        self.str_field(KANA_START)
    }

    /// Trailing kana, or `""` when the field is absent
    pub fn kana_end(&self) -> &str {
        self.str_field(KANA_END)
    }

    /// `kanaStart` followed by `kanaEnd`
    pub fn sort_key(&self) -> String {
        let (start, end) = (self.kana_start(), self.kana_end());
        let mut key = String::with_capacity(start.len() + end.len());
        key.push_str(start);
        key.push_str(end);
        key
    }

    /// Look up any field of the record
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// All fields, in document order
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    fn str_field(&self, field: &str) -> &str {
        self.0.get(field).and_then(Value::as_str).unwrap_or_default()
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
