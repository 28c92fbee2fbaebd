#![allow(dead_code)]

use apidoc::descriptor::{
    ApiDescription, ApiError, Definitions, Errors, Operation, Paths, Resource, Schema,
    VersionedPath,
};
use serde_json::json;

pub fn pet_schema() -> Schema {
    Schema::new(json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "kind": { "type": "string" }
        }
    }))
}

pub fn read_operation() -> Operation {
    Operation {
        description: Some("Returns a single pet.".to_string()),
        ..Operation::default()
    }
}

pub fn read_only_resource() -> Resource {
    let mut builder = Resource::builder();
    builder.read(read_operation());
    builder.build()
}

/// The canonical scenario: flat `/pets` path with only a read operation, no
/// definitions, no errors.
pub fn petstore() -> ApiDescription {
    let mut paths = Paths::flat();
    paths.put("/pets", read_only_resource()).unwrap();
    let mut builder = ApiDescription::builder();
    builder
        .id("petstore")
        .description("Pets API")
        .paths(paths.build());
    builder.build().unwrap()
}

pub fn petstore_definitions() -> Definitions {
    let mut builder = Definitions::builder();
    builder.put("pet", pet_schema()).unwrap();
    builder.build().unwrap()
}

pub fn petstore_errors() -> Errors {
    let mut builder = Errors::builder();
    builder
        .put(
            "notFound",
            ApiError {
                code: 404,
                description: Some("No such pet.".to_string()),
                schema: None,
            },
        )
        .unwrap();
    builder.build().unwrap()
}

pub fn versioned_petstore(versions: &[&str]) -> ApiDescription {
    let mut versioned = VersionedPath::builder();
    for version in versions {
        versioned.put(*version, read_only_resource()).unwrap();
    }
    let mut paths = Paths::versioned();
    paths.put("/pets", versioned.build().unwrap()).unwrap();
    let mut builder = ApiDescription::builder();
    builder
        .id("petstore")
        .description("Pets API")
        .paths(paths.build());
    builder.build().unwrap()
}
