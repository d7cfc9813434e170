//! The user record type

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ID: &str = "id";
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const GENDER: &str = "gender";
pub const JOB: &str = "job";
pub const DATE: &str = "date";
pub const ARCHIVED: &str = "archived";

/// A single user record.
///
/// Serializes as a plain JSON object so arbitrary caller-supplied fields
/// survive a load/save cycle untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord {
    fields: Map<String, Value>,
}

impl UserRecord {
    /// Builds a record from an arbitrary JSON value.
    ///
    /// Anything other than an object contributes no fields.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Returns the record id, if it is an integer
    pub fn id(&self) -> Option<i64> {
        self.fields.get(ID).and_then(Value::as_i64)
    }

    /// Assigns the record id
    pub fn set_id(&mut self, id: i64) {
        self.fields.insert(ID.to_string(), Value::from(id));
    }

    /// Returns a field value. JSON `null` is reported as absent.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// Returns a field only if it holds a string
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Returns the archived flag, if it is a boolean
    pub fn archived(&self) -> Option<bool> {
        self.fields.get(ARCHIVED).and_then(Value::as_bool)
    }

    /// Shallow-merges `patch` into this record.
    ///
    /// Fields present in the patch overwrite, all others are preserved.
    /// The `id` field is never taken from the patch.
    pub fn merge(&mut self, patch: UserRecord) {
        for (key, value) in patch.fields {
            if key == ID {
                continue;
            }
            self.fields.insert(key, value);
        }
    }

    /// Converts the record into a JSON value
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}
