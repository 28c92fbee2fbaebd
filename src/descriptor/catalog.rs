use std::collections::BTreeMap;

use super::types::{check_name, ApiError, Schema, ValidationError};

/// Named collection of reusable schema definitions.
///
/// Built once via [`DefinitionsBuilder`], then frozen. Guaranteed non-empty;
/// names are unique, non-empty, and whitespace-free.
#[derive(Debug, Clone, PartialEq)]
pub struct Definitions {
    entries: BTreeMap<String, Schema>,
}

impl Definitions {
    pub fn builder() -> DefinitionsBuilder {
        DefinitionsBuilder {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.entries.get(name)
    }

    /// Schema names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.entries.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Single-use builder for [`Definitions`].
#[derive(Debug, Default)]
pub struct DefinitionsBuilder {
    entries: BTreeMap<String, Schema>,
}

impl DefinitionsBuilder {
    /// Adds one schema definition. A failed `put` leaves the builder
    /// unchanged; the first schema submitted under a name is retained.
    pub fn put(
        &mut self,
        name: impl Into<String>,
        schema: Schema,
    ) -> Result<&mut Self, ValidationError> {
        let name = name.into();
        check_name("schema definition", &name)?;
        if self.entries.contains_key(&name) {
            return Err(ValidationError::DuplicateName {
                role: "schema definition",
                name,
            });
        }
        self.entries.insert(name, schema);
        Ok(self)
    }

    pub fn build(self) -> Result<Definitions, ValidationError> {
        if self.entries.is_empty() {
            return Err(ValidationError::NoEntries {
                role: "schema definition",
            });
        }
        Ok(Definitions {
            entries: self.entries,
        })
    }
}

/// Named catalog of errors the API can return.
///
/// Same construction contract as [`Definitions`].
#[derive(Debug, Clone, PartialEq)]
pub struct Errors {
    entries: BTreeMap<String, ApiError>,
}

impl Errors {
    pub fn builder() -> ErrorsBuilder {
        ErrorsBuilder {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ApiError> {
        self.entries.get(name)
    }

    /// Error names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ApiError)> {
        self.entries.iter().map(|(name, error)| (name.as_str(), error))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Single-use builder for [`Errors`].
#[derive(Debug, Default)]
pub struct ErrorsBuilder {
    entries: BTreeMap<String, ApiError>,
}

impl ErrorsBuilder {
    pub fn put(
        &mut self,
        name: impl Into<String>,
        error: ApiError,
    ) -> Result<&mut Self, ValidationError> {
        let name = name.into();
        check_name("error", &name)?;
        if self.entries.contains_key(&name) {
            return Err(ValidationError::DuplicateName { role: "error", name });
        }
        self.entries.insert(name, error);
        Ok(self)
    }

    pub fn build(self) -> Result<Errors, ValidationError> {
        if self.entries.is_empty() {
            return Err(ValidationError::NoEntries { role: "error" });
        }
        Ok(Errors {
            entries: self.entries,
        })
    }
}
