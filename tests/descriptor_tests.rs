#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use apidoc::descriptor::{
    ApiDescription, ApiError, Definitions, Errors, Operation, Paths, Resource, Schema,
    ValidationError, VersionedPath,
};
use serde_json::json;

use common::pet_schema;

#[test]
fn test_definitions_builder_retains_all_entries() {
    let names = ["pet", "owner", "visit"];
    let mut builder = Definitions::builder();
    for (index, name) in names.iter().enumerate() {
        builder
            .put(*name, Schema::new(json!({ "index": index })))
            .unwrap();
    }
    let definitions = builder.build().unwrap();

    assert_eq!(definitions.len(), names.len());
    for (index, name) in names.iter().enumerate() {
        assert_eq!(
            definitions.get(name).unwrap().json(),
            &json!({ "index": index })
        );
    }
    let mut listed: Vec<&str> = definitions.names().collect();
    listed.sort_unstable();
    let mut expected = names.to_vec();
    expected.sort_unstable();
    assert_eq!(listed, expected);
}

#[test]
fn test_definitions_duplicate_put_fails_without_mutating() {
    let mut builder = Definitions::builder();
    builder.put("pet", Schema::new(json!({ "first": true }))).unwrap();
    let err = builder
        .put("pet", Schema::new(json!({ "second": true })))
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::DuplicateName {
            role: "schema definition",
            name: "pet".to_string()
        }
    );

    // first-submitted schema remains retrievable
    let definitions = builder.build().unwrap();
    assert_eq!(definitions.get("pet").unwrap().json(), &json!({ "first": true }));
}

#[test]
fn test_definitions_rejects_bad_names() {
    let mut builder = Definitions::builder();
    assert!(matches!(
        builder.put("", pet_schema()).unwrap_err(),
        ValidationError::EmptyName { .. }
    ));
    assert!(matches!(
        builder.put("has space", pet_schema()).unwrap_err(),
        ValidationError::WhitespaceInName { .. }
    ));
    assert!(matches!(
        builder.put("has\ttab", pet_schema()).unwrap_err(),
        ValidationError::WhitespaceInName { .. }
    ));
}

#[test]
fn test_empty_definitions_build_fails() {
    let err = Definitions::builder().build().unwrap_err();
    assert_eq!(
        err,
        ValidationError::NoEntries {
            role: "schema definition"
        }
    );
}

#[test]
fn test_errors_catalog_mirrors_definitions_contract() {
    let mut builder = Errors::builder();
    builder
        .put(
            "notFound",
            ApiError {
                code: 404,
                description: None,
                schema: None,
            },
        )
        .unwrap();
    assert!(builder
        .put(
            "notFound",
            ApiError {
                code: 410,
                description: None,
                schema: None,
            },
        )
        .is_err());
    let errors = builder.build().unwrap();
    assert_eq!(errors.get("notFound").unwrap().code, 404);

    assert!(Errors::builder().build().is_err());
}

#[test]
fn test_flat_paths_builder_rejects_duplicates_and_whitespace() {
    let mut builder = Paths::flat();
    builder.put("/pets", Resource::builder().build()).unwrap();
    assert!(matches!(
        builder.put("/pets", Resource::builder().build()).unwrap_err(),
        ValidationError::DuplicateName { .. }
    ));
    assert!(matches!(
        builder.put("/has space", Resource::builder().build()).unwrap_err(),
        ValidationError::WhitespaceInName { .. }
    ));
    let paths = builder.build();
    assert_eq!(paths.len(), 1);
}

#[test]
fn test_versioned_path_requires_at_least_one_version() {
    let err = VersionedPath::builder().build().unwrap_err();
    assert_eq!(err, ValidationError::NoEntries { role: "version" });
}

#[test]
fn test_versioned_path_versions_are_sorted() {
    let mut builder = VersionedPath::builder();
    builder
        .put("2.0", Resource::builder().build())
        .unwrap()
        .put("1.0", Resource::builder().build())
        .unwrap();
    let versioned = builder.build().unwrap();
    let versions: Vec<&str> = versioned.versions().collect();
    assert_eq!(versions, vec!["1.0", "2.0"]);
}

#[test]
fn test_resource_builder_rejects_duplicate_action_names() {
    let mut builder = Resource::builder();
    builder.action("restart", Operation::default()).unwrap();
    assert!(matches!(
        builder.action("restart", Operation::default()).unwrap_err(),
        ValidationError::DuplicateName { .. }
    ));
}

#[test]
fn test_api_description_requires_id_and_description() {
    let err = ApiDescription::builder().build().unwrap_err();
    assert_eq!(err, ValidationError::MissingField { role: "id" });

    let mut builder = ApiDescription::builder();
    builder.id("petstore");
    let err = builder.build().unwrap_err();
    assert_eq!(err, ValidationError::MissingField { role: "description" });

    let mut builder = ApiDescription::builder();
    builder.id("pet store").description("Pets API");
    assert!(matches!(
        builder.build().unwrap_err(),
        ValidationError::WhitespaceInName { .. }
    ));
}

#[test]
fn test_api_description_accessors() {
    let api = common::petstore();
    assert_eq!(api.id(), "petstore");
    assert_eq!(api.description(), "Pets API");
    assert!(matches!(api.paths(), Some(Paths::Flat(_))));
    assert!(api.definitions().is_none());
    assert!(api.errors().is_none());
}
