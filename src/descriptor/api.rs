use super::catalog::{Definitions, Errors};
use super::paths::Paths;
use super::types::{check_name, ValidationError};

/// A complete, validated API description.
///
/// The root of the model: identity, prose description, and the optional
/// path table, schema catalog, and error catalog. The `id` seeds every
/// generated filename and must therefore be non-empty and whitespace-free.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDescription {
    id: String,
    description: String,
    paths: Option<Paths>,
    definitions: Option<Definitions>,
    errors: Option<Errors>,
}

impl ApiDescription {
    pub fn builder() -> ApiDescriptionBuilder {
        ApiDescriptionBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn paths(&self) -> Option<&Paths> {
        self.paths.as_ref()
    }

    pub fn definitions(&self) -> Option<&Definitions> {
        self.definitions.as_ref()
    }

    pub fn errors(&self) -> Option<&Errors> {
        self.errors.as_ref()
    }
}

/// Single-use builder for [`ApiDescription`].
#[derive(Debug, Default)]
pub struct ApiDescriptionBuilder {
    id: Option<String>,
    description: Option<String>,
    paths: Option<Paths>,
    definitions: Option<Definitions>,
    errors: Option<Errors>,
}

impl ApiDescriptionBuilder {
    pub fn id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn paths(&mut self, paths: Paths) -> &mut Self {
        self.paths = Some(paths);
        self
    }

    pub fn definitions(&mut self, definitions: Definitions) -> &mut Self {
        self.definitions = Some(definitions);
        self
    }

    pub fn errors(&mut self, errors: Errors) -> &mut Self {
        self.errors = Some(errors);
        self
    }

    pub fn build(self) -> Result<ApiDescription, ValidationError> {
        let id = self.id.ok_or(ValidationError::MissingField { role: "id" })?;
        check_name("id", &id)?;
        let description = self
            .description
            .ok_or(ValidationError::MissingField {
                role: "description",
            })?;
        if description.is_empty() {
            return Err(ValidationError::MissingField {
                role: "description",
            });
        }
        Ok(ApiDescription {
            id,
            description,
            paths: self.paths,
            definitions: self.definitions,
            errors: self.errors,
        })
    }
}
