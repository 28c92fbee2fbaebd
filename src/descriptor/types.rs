use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A JSON schema body attached to a resource, operation, or catalog entry.
///
/// Schemas are opaque to the generator: they are carried as raw JSON and
/// rendered into documents as pretty-printed listing blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema(Value);

impl Schema {
    pub fn new(json: Value) -> Self {
        Schema(json)
    }

    pub fn json(&self) -> &Value {
        &self.0
    }

    /// Pretty-printed JSON rendering used for document listing blocks.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl From<Value> for Schema {
    fn from(json: Value) -> Self {
        Schema(json)
    }
}

/// Where an operation parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterSource {
    Path,
    Query,
    Header,
    Cookie,
}

impl fmt::Display for ParameterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterSource::Path => write!(f, "Path"),
            ParameterSource::Query => write!(f, "Query"),
            ParameterSource::Header => write!(f, "Header"),
            ParameterSource::Cookie => write!(f, "Cookie"),
        }
    }
}

/// One parameter accepted by an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub source: ParameterSource,
    pub data_type: Option<String>,
    pub required: bool,
    pub description: Option<String>,
}

/// An error an operation may return, or an entry in the error catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub code: u16,
    pub description: Option<String>,
    pub schema: Option<Schema>,
}

/// A single operation bound to a resource: one of the CRUD/patch slots, the
/// body of a named action, or the body of a named query.
///
/// Every field is optional; an operation with no fields still renders as a
/// bare section heading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operation {
    pub description: Option<String>,
    pub parameters: Vec<Parameter>,
    pub errors: Vec<ApiError>,
    pub request: Option<Schema>,
    pub response: Option<Schema>,
}

/// A named query bound to a resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub queryable_fields: Vec<String>,
    pub operation: Operation,
}

/// Invalid descriptor input, surfaced by the model builders at construction
/// time. Never recovered; the descriptor must be fixed at the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A name was empty where one is required.
    EmptyName { role: &'static str },
    /// A name contains whitespace.
    WhitespaceInName { role: &'static str, name: String },
    /// A name was submitted twice to the same collection.
    DuplicateName { role: &'static str, name: String },
    /// A collection that requires at least one entry was built empty.
    NoEntries { role: &'static str },
    /// A required field was never supplied to a builder.
    MissingField { role: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName { role } => {
                write!(f, "{role} name is required and may not be empty")
            }
            ValidationError::WhitespaceInName { role, name } => {
                write!(f, "{role} name `{name}` may not contain whitespace")
            }
            ValidationError::DuplicateName { role, name } => {
                write!(f, "{role} name `{name}` is not unique")
            }
            ValidationError::NoEntries { role } => {
                write!(f, "at least one {role} is required")
            }
            ValidationError::MissingField { role } => {
                write!(f, "{role} is required")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Shared name validation for every name-keyed collection in the model.
pub(crate) fn check_name(role: &'static str, name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName { role });
    }
    if name.chars().any(char::is_whitespace) {
        return Err(ValidationError::WhitespaceInName {
            role,
            name: name.to_string(),
        });
    }
    Ok(())
}
