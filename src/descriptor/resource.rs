use std::collections::BTreeMap;

use super::types::{check_name, Operation, Query, Schema, ValidationError};

/// The operations attached to one path (or one version of a path).
///
/// Any subset of the operation slots may be absent. Empty action and query
/// collections are equivalent to absent ones: neither produces a section in
/// the generated documentation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    schema: Option<Schema>,
    create: Option<Operation>,
    read: Option<Operation>,
    update: Option<Operation>,
    delete: Option<Operation>,
    patch: Option<Operation>,
    actions: BTreeMap<String, Operation>,
    queries: BTreeMap<String, Query>,
}

impl Resource {
    pub fn builder() -> ResourceBuilder {
        ResourceBuilder::default()
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    pub fn create(&self) -> Option<&Operation> {
        self.create.as_ref()
    }

    pub fn read(&self) -> Option<&Operation> {
        self.read.as_ref()
    }

    pub fn update(&self) -> Option<&Operation> {
        self.update.as_ref()
    }

    pub fn delete(&self) -> Option<&Operation> {
        self.delete.as_ref()
    }

    pub fn patch(&self) -> Option<&Operation> {
        self.patch.as_ref()
    }

    /// Actions keyed by name, in lexicographic order.
    pub fn actions(&self) -> &BTreeMap<String, Operation> {
        &self.actions
    }

    /// Queries keyed by name, in lexicographic order.
    pub fn queries(&self) -> &BTreeMap<String, Query> {
        &self.queries
    }
}

/// Single-use builder for [`Resource`].
#[derive(Debug, Default)]
pub struct ResourceBuilder {
    schema: Option<Schema>,
    create: Option<Operation>,
    read: Option<Operation>,
    update: Option<Operation>,
    delete: Option<Operation>,
    patch: Option<Operation>,
    actions: BTreeMap<String, Operation>,
    queries: BTreeMap<String, Query>,
}

impl ResourceBuilder {
    pub fn schema(&mut self, schema: Schema) -> &mut Self {
        self.schema = Some(schema);
        self
    }

    pub fn create(&mut self, operation: Operation) -> &mut Self {
        self.create = Some(operation);
        self
    }

    pub fn read(&mut self, operation: Operation) -> &mut Self {
        self.read = Some(operation);
        self
    }

    pub fn update(&mut self, operation: Operation) -> &mut Self {
        self.update = Some(operation);
        self
    }

    pub fn delete(&mut self, operation: Operation) -> &mut Self {
        self.delete = Some(operation);
        self
    }

    pub fn patch(&mut self, operation: Operation) -> &mut Self {
        self.patch = Some(operation);
        self
    }

    pub fn action(
        &mut self,
        name: impl Into<String>,
        operation: Operation,
    ) -> Result<&mut Self, ValidationError> {
        let name = name.into();
        check_name("action", &name)?;
        if self.actions.contains_key(&name) {
            return Err(ValidationError::DuplicateName {
                role: "action",
                name,
            });
        }
        self.actions.insert(name, operation);
        Ok(self)
    }

    pub fn query(
        &mut self,
        name: impl Into<String>,
        query: Query,
    ) -> Result<&mut Self, ValidationError> {
        let name = name.into();
        check_name("query", &name)?;
        if self.queries.contains_key(&name) {
            return Err(ValidationError::DuplicateName { role: "query", name });
        }
        self.queries.insert(name, query);
        Ok(self)
    }

    pub fn build(self) -> Resource {
        Resource {
            schema: self.schema,
            create: self.create,
            read: self.read,
            update: self.update,
            delete: self.delete,
            patch: self.patch,
            actions: self.actions,
            queries: self.queries,
        }
    }
}
