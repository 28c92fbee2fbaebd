use std::collections::BTreeMap;

use super::resource::Resource;
use super::types::{check_name, ValidationError};

/// Table of API paths.
///
/// A table is either flat (every path resolves directly to a resource) or
/// versioned (every path resolves to a set of versioned resources). The
/// variant is decided once at construction; a single table can never mix the
/// two forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Paths {
    Flat(BTreeMap<String, Resource>),
    Versioned(BTreeMap<String, VersionedPath>),
}

impl Paths {
    pub fn flat() -> FlatPathsBuilder {
        FlatPathsBuilder {
            entries: BTreeMap::new(),
        }
    }

    pub fn versioned() -> VersionedPathsBuilder {
        VersionedPathsBuilder {
            entries: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Paths::Flat(entries) => entries.len(),
            Paths::Versioned(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Single-use builder for a flat [`Paths`] table.
#[derive(Debug, Default)]
pub struct FlatPathsBuilder {
    entries: BTreeMap<String, Resource>,
}

impl FlatPathsBuilder {
    pub fn put(
        &mut self,
        path: impl Into<String>,
        resource: Resource,
    ) -> Result<&mut Self, ValidationError> {
        let path = path.into();
        check_name("path", &path)?;
        if self.entries.contains_key(&path) {
            return Err(ValidationError::DuplicateName {
                role: "path",
                name: path,
            });
        }
        self.entries.insert(path, resource);
        Ok(self)
    }

    /// An empty table is allowed and behaves like an absent one during
    /// generation.
    pub fn build(self) -> Paths {
        Paths::Flat(self.entries)
    }
}

/// Single-use builder for a versioned [`Paths`] table.
#[derive(Debug, Default)]
pub struct VersionedPathsBuilder {
    entries: BTreeMap<String, VersionedPath>,
}

impl VersionedPathsBuilder {
    pub fn put(
        &mut self,
        path: impl Into<String>,
        versions: VersionedPath,
    ) -> Result<&mut Self, ValidationError> {
        let path = path.into();
        check_name("path", &path)?;
        if self.entries.contains_key(&path) {
            return Err(ValidationError::DuplicateName {
                role: "path",
                name: path,
            });
        }
        self.entries.insert(path, versions);
        Ok(self)
    }

    pub fn build(self) -> Paths {
        Paths::Versioned(self.entries)
    }
}

/// The versions available under one path, each resolving to a resource.
///
/// Version strings are free-form; this layer enforces no format, only that
/// they are non-empty, whitespace-free, and unique. Iteration is
/// lexicographic.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedPath {
    entries: BTreeMap<String, Resource>,
}

impl VersionedPath {
    pub fn builder() -> VersionedPathBuilder {
        VersionedPathBuilder {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, version: &str) -> Option<&Resource> {
        self.entries.get(version)
    }

    /// Version strings in lexicographic order.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.entries
            .iter()
            .map(|(version, resource)| (version.as_str(), resource))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Single-use builder for [`VersionedPath`].
#[derive(Debug, Default)]
pub struct VersionedPathBuilder {
    entries: BTreeMap<String, Resource>,
}

impl VersionedPathBuilder {
    pub fn put(
        &mut self,
        version: impl Into<String>,
        resource: Resource,
    ) -> Result<&mut Self, ValidationError> {
        let version = version.into();
        check_name("version", &version)?;
        if self.entries.contains_key(&version) {
            return Err(ValidationError::DuplicateName {
                role: "version",
                name: version,
            });
        }
        self.entries.insert(version, resource);
        Ok(self)
    }

    pub fn build(self) -> Result<VersionedPath, ValidationError> {
        if self.entries.is_empty() {
            return Err(ValidationError::NoEntries { role: "version" });
        }
        Ok(VersionedPath {
            entries: self.entries,
        })
    }
}
