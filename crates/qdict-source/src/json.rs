//! JSON dictionary files.
//!
//! The expected shape is an array of objects, one per entry:
//!
//! ```json
//! [
//!   { "origin_name": "apple", "trans_name": "苹果", "pos": "n." },
//!   { "origin_name": "New York", "trans_name": "纽约" }
//! ]
//! ```
//!
//! The key field (default `origin_name`) becomes the term and the value field
//! (default `trans_name`) the translation shown to the user. The whole object
//! is kept as the record so renderers can show extra columns.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use qdict_core::config::DictionaryConfig;
use qdict_core::Vocabulary;
use serde_json::{Map, Value};

use crate::{SourceError, VocabularySource};

/// One dictionary entry as loaded from JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct DictRecord {
    /// Value of the configured value field.
    pub translation: String,
    /// The complete source object, including the key and value fields.
    pub fields: Map<String, Value>,
}

/// Loads a [`Vocabulary`] of [`DictRecord`]s from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
    key_field: String,
    value_field: String,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key_field: "origin_name".to_string(),
            value_field: "trans_name".to_string(),
        }
    }

    /// Build from the `[dictionary]` config section, resolving a relative
    /// path against `base`.
    pub fn from_config(config: &DictionaryConfig, base: &Path) -> Self {
        Self::new(config.resolve_path(base))
            .key_field(config.key_field.clone())
            .value_field(config.value_field.clone())
    }

    pub fn key_field(mut self, field: impl Into<String>) -> Self {
        self.key_field = field.into();
        self
    }

    pub fn value_field(mut self, field: impl Into<String>) -> Self {
        self.value_field = field.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse dictionary JSON from any reader.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Vocabulary<DictRecord>, SourceError> {
        let value: Value = serde_json::from_reader(reader)?;
        self.build(value)
    }

    /// Parse dictionary JSON from a string.
    pub fn parse_str(&self, json: &str) -> Result<Vocabulary<DictRecord>, SourceError> {
        let value: Value = serde_json::from_str(json)?;
        self.build(value)
    }

    fn build(&self, value: Value) -> Result<Vocabulary<DictRecord>, SourceError> {
        let items = match value {
            Value::Array(items) => items,
            other => return Err(SourceError::NotAnArray { found: kind(&other) }),
        };

        let mut builder = Vocabulary::builder();
        for (index, item) in items.into_iter().enumerate() {
            let Value::Object(fields) = item else {
                return Err(SourceError::NotAnObject { index });
            };
            let term = string_field(&fields, &self.key_field, index)?.to_owned();
            let translation = string_field(&fields, &self.value_field, index)?.to_owned();
            if builder.insert(term, DictRecord { translation, fields }).is_some() {
                tracing::debug!(index, "duplicate term replaced");
            }
        }

        if builder.overwritten() > 0 {
            tracing::warn!(
                path = %self.path.display(),
                duplicates = builder.overwritten(),
                "dictionary has duplicate terms; later entries win"
            );
        }

        let vocabulary = builder.build();
        tracing::debug!(path = %self.path.display(), terms = vocabulary.len(), "dictionary loaded");
        Ok(vocabulary)
    }
}

impl VocabularySource for JsonSource {
    type Record = DictRecord;

    fn load(&self) -> Result<Vocabulary<DictRecord>, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        self.parse_reader(BufReader::new(file))
    }
}

fn string_field<'a>(
    fields: &'a Map<String, Value>,
    field: &str,
    index: usize,
) -> Result<&'a str, SourceError> {
    match fields.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(SourceError::NotAString {
            index,
            field: field.to_string(),
        }),
        None => Err(SourceError::MissingField {
            index,
            field: field.to_string(),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> JsonSource {
        JsonSource::new("inline.json")
    }

    #[test]
    fn loads_entries_in_file_order() {
        let v = source()
            .parse_str(
                r#"[
                    {"origin_name": "pear", "trans_name": "梨"},
                    {"origin_name": "apple", "trans_name": "苹果", "pos": "n."}
                ]"#,
            )
            .unwrap();
        assert_eq!(v.terms().collect::<Vec<_>>(), vec!["pear", "apple"]);
        let apple = v.get("apple").unwrap();
        assert_eq!(apple.translation, "苹果");
        assert_eq!(apple.fields["pos"], "n.");
    }

    #[test]
    fn custom_field_names() {
        let v = source()
            .key_field("word")
            .value_field("meaning")
            .parse_str(r#"[{"word": "cat", "meaning": "猫"}]"#)
            .unwrap();
        assert_eq!(v.get("cat").unwrap().translation, "猫");
    }

    #[test]
    fn duplicates_last_write_wins() {
        let v = source()
            .parse_str(
                r#"[
                    {"origin_name": "a", "trans_name": "first"},
                    {"origin_name": "b", "trans_name": "b"},
                    {"origin_name": "a", "trans_name": "second"}
                ]"#,
            )
            .unwrap();
        assert_eq!(v.terms().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(v.get("a").unwrap().translation, "second");
    }

    #[test]
    fn rejects_non_array() {
        let err = source().parse_str(r#"{"origin_name": "a"}"#).unwrap_err();
        assert!(matches!(err, SourceError::NotAnArray { found: "an object" }));
    }

    #[test]
    fn rejects_missing_value_field() {
        let err = source()
            .parse_str(r#"[{"origin_name": "a", "trans_name": "x"}, {"origin_name": "b"}]"#)
            .unwrap_err();
        match err {
            SourceError::MissingField { index, field } => {
                assert_eq!(index, 1);
                assert_eq!(field, "trans_name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_string_key() {
        let err = source()
            .parse_str(r#"[{"origin_name": 42, "trans_name": "x"}]"#)
            .unwrap_err();
        assert!(matches!(err, SourceError::NotAString { index: 0, .. }));
    }

    #[test]
    fn rejects_non_object_entry() {
        let err = source().parse_str(r#"["apple"]"#).unwrap_err();
        assert!(matches!(err, SourceError::NotAnObject { index: 0 }));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = source().parse_str("[{").unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.json");
        std::fs::write(&path, r#"[{"origin_name": "cat", "trans_name": "猫"}]"#).unwrap();
        let v = JsonSource::new(&path).load().unwrap();
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = JsonSource::new(&path).load().unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
