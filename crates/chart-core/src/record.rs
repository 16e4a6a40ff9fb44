// File: crates/chart-core/src/record.rs
// Summary: Telemetry records (field -> tagged value) and the shared, immutable Dataset snapshot.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value as Json;

use crate::error::DatasetError;

/// One field of a record. A key missing from the record is "absent" and has no
/// `FieldValue` at all.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Null,
}

impl FieldValue {
    /// Finite numeric value, if any. Text is never coerced.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            FieldValue::Number(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<Json> for FieldValue {
    fn from(v: Json) -> Self {
        match v {
            Json::Null => FieldValue::Null,
            Json::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Null),
            Json::String(s) => FieldValue::Text(s),
            other => FieldValue::Text(other.to_string()),
        }
    }
}

/// One timestamped telemetry sample.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used when assembling records outside of JSON.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Numeric value of `key`; `None` when absent, null, text or non-finite.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(FieldValue::as_f64)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}

/// Ordered, read-only collection of records. Cloning shares the snapshot.
#[derive(Clone, Debug)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records: records.into() }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Parse a JSON array of flat objects.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        let doc: Json = serde_json::from_slice(bytes)?;
        Self::from_json(doc)
    }

    pub fn from_json(doc: Json) -> Result<Self, DatasetError> {
        let items = match doc {
            Json::Array(items) => items,
            other => return Err(DatasetError::NotAnArray(json_kind(&other))),
        };
        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Json::Object(map) => {
                    records.push(map.into_iter().map(|(k, v)| (k, FieldValue::from(v))).collect());
                }
                other => {
                    return Err(DatasetError::NotAnObject { index, found: json_kind(&other) });
                }
            }
        }
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// True when both handles point at the same snapshot.
    pub fn ptr_eq(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn json_kind(v: &Json) -> &'static str {
    match v {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_values_map_to_tags() {
        let ds = Dataset::from_json_slice(
            br#"[{"TimeStamp":"2024-01-01T10:00:00Z","Speed":12.5,"Altitude":null,"Flag":true}]"#,
        )
        .unwrap();
        let r = ds.get(0).unwrap();
        assert_eq!(r.number("Speed"), Some(12.5));
        assert_eq!(r.get("Altitude"), Some(&FieldValue::Null));
        assert_eq!(r.number("Altitude"), None);
        assert_eq!(r.get("Flag"), Some(&FieldValue::Text("true".into())));
        assert_eq!(r.number("Missing"), None);
        assert!(!r.contains("Missing"));
    }

    #[test]
    fn text_is_not_coerced_to_number() {
        let r = Record::new().with("Speed", "12");
        assert_eq!(r.number("Speed"), None);
    }

    #[test]
    fn rejects_non_array_and_non_object_rows() {
        assert!(matches!(
            Dataset::from_json_slice(br#"{"a":1}"#),
            Err(DatasetError::NotAnArray("an object"))
        ));
        assert!(matches!(
            Dataset::from_json_slice(br#"[{"a":1}, 3]"#),
            Err(DatasetError::NotAnObject { index: 1, .. })
        ));
        assert!(matches!(Dataset::from_json_slice(b"[{"), Err(DatasetError::Json(_))));
    }

    #[test]
    fn clones_share_the_snapshot() {
        let a = Dataset::new(vec![Record::new().with("x", 1.0)]);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&Dataset::new(vec![Record::new().with("x", 1.0)])));
    }
}
