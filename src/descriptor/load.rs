use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;
use serde_json::Value;

use super::api::ApiDescription;
use super::catalog::{Definitions, Errors};
use super::paths::{Paths, VersionedPath};
use super::resource::Resource;
use super::types::{ApiError, Operation, Parameter, ParameterSource, Query, Schema};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDescriptor {
    id: String,
    description: String,
    paths: Option<BTreeMap<String, RawPathItem>>,
    definitions: Option<BTreeMap<String, Value>>,
    errors: Option<BTreeMap<String, RawApiError>>,
}

// Each path entry carries an explicit tag, so the flat/versioned decision is
// made while parsing rather than probed later.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPathItem {
    Versioned {
        versions: BTreeMap<String, RawResource>,
    },
    Flat {
        resource: RawResource,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResource {
    schema: Option<Value>,
    create: Option<RawOperation>,
    read: Option<RawOperation>,
    update: Option<RawOperation>,
    delete: Option<RawOperation>,
    patch: Option<RawOperation>,
    #[serde(default)]
    actions: Vec<RawAction>,
    #[serde(default)]
    queries: Vec<RawQuery>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOperation {
    description: Option<String>,
    #[serde(default)]
    parameters: Vec<RawParameter>,
    #[serde(default)]
    errors: Vec<RawApiError>,
    request: Option<Value>,
    response: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParameter {
    name: String,
    #[serde(rename = "in", default = "default_source")]
    source: ParameterSource,
    #[serde(rename = "type")]
    data_type: Option<String>,
    #[serde(default)]
    required: bool,
    description: Option<String>,
}

fn default_source() -> ParameterSource {
    ParameterSource::Query
}

#[derive(Debug, Deserialize)]
struct RawAction {
    name: String,
    #[serde(flatten)]
    operation: RawOperation,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuery {
    name: String,
    #[serde(default)]
    queryable_fields: Vec<String>,
    #[serde(flatten)]
    operation: RawOperation,
}

#[derive(Debug, Deserialize)]
struct RawApiError {
    code: u16,
    description: Option<String>,
    schema: Option<Value>,
}

impl From<RawParameter> for Parameter {
    fn from(raw: RawParameter) -> Self {
        Parameter {
            name: raw.name,
            source: raw.source,
            data_type: raw.data_type,
            required: raw.required,
            description: raw.description,
        }
    }
}

impl From<RawApiError> for ApiError {
    fn from(raw: RawApiError) -> Self {
        ApiError {
            code: raw.code,
            description: raw.description,
            schema: raw.schema.map(Schema::new),
        }
    }
}

impl From<RawOperation> for Operation {
    fn from(raw: RawOperation) -> Self {
        Operation {
            description: raw.description,
            parameters: raw.parameters.into_iter().map(Parameter::from).collect(),
            errors: raw.errors.into_iter().map(ApiError::from).collect(),
            request: raw.request.map(Schema::new),
            response: raw.response.map(Schema::new),
        }
    }
}

/// Loads and validates an API descriptor from a JSON or YAML file.
///
/// The format is sniffed from the file extension: `.yaml`/`.yml` parse as
/// YAML, anything else as JSON.
pub fn load_descriptor(path: &Path) -> anyhow::Result<ApiDescription> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read descriptor {}", path.display()))?;
    let extension = path.extension().and_then(|e| e.to_str());
    let raw: RawDescriptor = if matches!(extension, Some("yaml") | Some("yml")) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse descriptor {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse descriptor {}", path.display()))?
    };
    descriptor_from_raw(raw)
}

fn descriptor_from_raw(raw: RawDescriptor) -> anyhow::Result<ApiDescription> {
    let mut builder = ApiDescription::builder();
    builder.id(raw.id).description(raw.description);

    if let Some(paths) = raw.paths {
        builder.paths(build_paths(paths)?);
    }
    if let Some(definitions) = raw.definitions {
        let mut catalog = Definitions::builder();
        for (name, schema) in definitions {
            catalog.put(name, Schema::new(schema))?;
        }
        builder.definitions(catalog.build()?);
    }
    if let Some(errors) = raw.errors {
        let mut catalog = Errors::builder();
        for (name, error) in errors {
            catalog.put(name, ApiError::from(error))?;
        }
        builder.errors(catalog.build()?);
    }
    Ok(builder.build()?)
}

fn build_paths(raw: BTreeMap<String, RawPathItem>) -> anyhow::Result<Paths> {
    let mut versioned_table: Option<bool> = None;
    let mut flat = Paths::flat();
    let mut versioned = Paths::versioned();

    for (path, item) in raw {
        match item {
            RawPathItem::Flat { resource } => {
                if versioned_table == Some(true) {
                    bail!("path `{path}` is flat, but earlier paths in the table are versioned");
                }
                versioned_table = Some(false);
                flat.put(path, build_resource(resource)?)?;
            }
            RawPathItem::Versioned { versions } => {
                if versioned_table == Some(false) {
                    bail!("path `{path}` is versioned, but earlier paths in the table are flat");
                }
                versioned_table = Some(true);
                let mut version_builder = VersionedPath::builder();
                for (version, resource) in versions {
                    version_builder.put(version, build_resource(resource)?)?;
                }
                versioned.put(path, version_builder.build()?)?;
            }
        }
    }

    Ok(if versioned_table == Some(true) {
        versioned.build()
    } else {
        flat.build()
    })
}

fn build_resource(raw: RawResource) -> anyhow::Result<Resource> {
    let mut builder = Resource::builder();
    if let Some(schema) = raw.schema {
        builder.schema(Schema::new(schema));
    }
    if let Some(operation) = raw.create {
        builder.create(operation.into());
    }
    if let Some(operation) = raw.read {
        builder.read(operation.into());
    }
    if let Some(operation) = raw.update {
        builder.update(operation.into());
    }
    if let Some(operation) = raw.delete {
        builder.delete(operation.into());
    }
    if let Some(operation) = raw.patch {
        builder.patch(operation.into());
    }
    for action in raw.actions {
        builder.action(action.name, action.operation.into())?;
    }
    for query in raw.queries {
        builder.query(
            query.name,
            Query {
                queryable_fields: query.queryable_fields,
                operation: query.operation.into(),
            },
        )?;
    }
    Ok(builder.build())
}
