//! Shape validation of raw contract responses.
//!
//! DTOs derive `Deserialize` and are decoded through `serde_path_to_error`, so
//! the first missing or mistyped field aborts the decode with its dotted path.
//! A DTO is only ever returned whole.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, ValidatorClientError};

/// Why a raw payload was rejected, relative to the payload root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub field: String,
    pub reason: String,
}

impl SchemaError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn prefixed(self, prefix: &str) -> Self {
        let field = if self.field.is_empty() {
            prefix.to_string()
        } else if self.field.starts_with('[') {
            format!("{prefix}{}", self.field)
        } else {
            format!("{prefix}.{}", self.field)
        };
        Self { field, ..self }
    }

    pub fn into_client_error(self, query: &str) -> ValidatorClientError {
        ValidatorClientError::SchemaMismatch {
            query: query.to_string(),
            field: if self.field.is_empty() {
                "<root>".to_string()
            } else {
                self.field
            },
            reason: self.reason,
        }
    }

    fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = match err.path().to_string() {
            root if root == "." => String::new(),
            path => path,
        };
        let message = err.into_inner().to_string();

        // serde reports a missing field at the enclosing object
        match missing_field_name(&message) {
            Some(name) => SchemaError::new(name, "missing field").prefixed_unless_root(&path),
            None => SchemaError::new(path, message),
        }
    }

    fn prefixed_unless_root(self, path: &str) -> Self {
        if path.is_empty() {
            self
        } else {
            self.prefixed(path)
        }
    }
}

fn missing_field_name(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
}

/// Decode `raw` as `T`, reporting the dotted path of the first bad field.
pub fn from_value<T: DeserializeOwned>(raw: &Value) -> std::result::Result<T, SchemaError> {
    serde_path_to_error::deserialize(raw).map_err(SchemaError::from_path_error)
}

/// Decode `raw` as `T`, attributing failures to `query`.
pub fn parse_response<T: DeserializeOwned>(query: &str, raw: &Value) -> Result<T> {
    from_value(raw).map_err(|err| err.into_client_error(query))
}
