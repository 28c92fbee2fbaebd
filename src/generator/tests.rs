#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::descriptor::Operation;
use std::fs;

#[test]
fn test_claim_returns_normalized_namespace() {
    let dir = tempfile::tempdir().unwrap();
    let mut run = DocRun::new(dir.path());
    let namespace = run.claim(&["petstore", "paths", "/pets"]).unwrap();
    assert_eq!(namespace, "petstore-paths-pets");
}

#[test]
fn test_claim_rejects_second_identical_chain() {
    let dir = tempfile::tempdir().unwrap();
    let mut run = DocRun::new(dir.path());
    run.claim(&["a", "b"]).unwrap();
    let err = run.claim(&["a", "b"]).unwrap_err();
    assert!(matches!(err, DocGenError::NamingCollision { .. }));
}

#[test]
fn test_claim_rejects_distinct_chains_normalizing_identically() {
    let dir = tempfile::tempdir().unwrap();
    let mut run = DocRun::new(dir.path());
    run.claim(&["a", "/pets"]).unwrap();
    let err = run.claim(&["a", "pets"]).unwrap_err();
    match err {
        DocGenError::NamingCollision {
            filename,
            first,
            second,
        } => {
            assert_eq!(filename, "a-pets.adoc");
            assert_eq!(first, "a//pets");
            assert_eq!(second, "a/pets");
        }
        other => panic!("expected naming collision, got {other:?}"),
    }
}

#[test]
fn test_write_emits_file_and_returns_filename() {
    let dir = tempfile::tempdir().unwrap();
    let run = DocRun::new(dir.path());
    let mut doc = AsciiDoc::new();
    doc.section_title1("Paths");
    let filename = run.write(&doc, "petstore-paths").unwrap();
    assert_eq!(filename, "petstore-paths.adoc");
    let written = fs::read_to_string(dir.path().join(&filename)).unwrap();
    assert_eq!(written, "== Paths\n\n");
}

#[test]
fn test_empty_resource_document_has_no_headings() {
    let dir = tempfile::tempdir().unwrap();
    let mut run = DocRun::new(dir.path());
    let resource = Resource::builder().build();
    let filename = run.output_resource(&resource, 2, "ns").unwrap();
    let written = fs::read_to_string(dir.path().join(&filename)).unwrap();
    assert!(written.is_empty());
}

#[test]
fn test_resource_sections_appear_in_fixed_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut run = DocRun::new(dir.path());
    let mut builder = Resource::builder();
    builder
        .patch(Operation::default())
        .create(Operation::default())
        .read(Operation::default());
    let filename = run.output_resource(&builder.build(), 2, "ns").unwrap();
    let written = fs::read_to_string(dir.path().join(&filename)).unwrap();
    let create = written.find("ns-resource-create.adoc").unwrap();
    let read = written.find("ns-resource-read.adoc").unwrap();
    let patch = written.find("ns-resource-patch.adoc").unwrap();
    assert!(create < read && read < patch);
}

#[test]
fn test_new_rejects_file_as_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("occupied");
    fs::write(&file, b"not a directory").unwrap();
    let err = ApiDocGenerator::new(&file).unwrap_err();
    assert!(matches!(err, DocGenError::Configuration { .. }));
}

#[test]
fn test_new_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("doc").join("api");
    let generator = ApiDocGenerator::new(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(generator.output_dir(), nested.as_path());
}
