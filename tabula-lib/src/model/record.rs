//! Raw data record

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;

static NULL: Value = Value::Null;

/// One raw data item as handed over by the data/fetch collaborator.
///
/// Records hold field values as a `HashMap<String, Value>` and serialize as a
/// flat JSON object.
///
/// # Example
///
/// ```
/// use tabula_lib::model::{Record, Value};
///
/// let record = Record::new()
///     .set("customer", "Jaxbean")
///     .set("amount", 3107.34);
///
/// assert_eq!(record.value("customer"), &Value::from("Jaxbean"));
/// assert!(record.value("missing").is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, consuming and returning the record.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Returns the field value, reading an absent field as [`Value::Null`].
    pub fn value(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&NULL)
    }

    /// Returns `true` if the record has the field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a copy holding only the named fields.
    ///
    /// Every name is present in the result; names missing from this record
    /// are filled with [`Value::Null`].
    pub fn project<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Record {
        let fields = names
            .into_iter()
            .map(|name| (name.to_string(), self.value(name).clone()))
            .collect();
        Record { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flat_object() {
        let json = r#"{"id": 1, "customer": "Jaxbean", "due": "2021-05-09"}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.len(), 3);
        assert_eq!(record.value("id"), &Value::Int(1));
        assert_eq!(record.value("customer").as_str(), Some("Jaxbean"));
    }

    #[test]
    fn test_project_keeps_only_named_fields() {
        let record = Record::new()
            .set("customer", "Feedmix")
            .set("status", "Unsent")
            .set("secret", "hidden");

        let projected = record.project(["customer", "status", "currency"]);

        assert_eq!(projected.len(), 3);
        assert!(!projected.contains("secret"));
        assert!(projected.value("currency").is_null());
        assert_eq!(projected.value("status"), &Value::from("Unsent"));
    }
}
