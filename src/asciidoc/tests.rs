#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use std::fs;

#[test]
fn test_document_title() {
    let mut doc = AsciiDoc::new();
    doc.document_title("API Descriptor");
    assert_eq!(doc.as_str(), "= API Descriptor\n\n");
}

#[test]
fn test_section_title_levels() {
    let mut doc = AsciiDoc::new();
    doc.section_title("One", 1);
    doc.section_title("Three", 3);
    doc.section_title("Five", 5);
    assert_eq!(
        doc.as_str(),
        "== One\n\n==== Three\n\n====== Five\n\n"
    );
}

#[test]
fn test_section_title_conveniences_match_explicit_levels() {
    let mut explicit = AsciiDoc::new();
    explicit
        .section_title("a", 1)
        .section_title("b", 2)
        .section_title("c", 3);
    let mut convenient = AsciiDoc::new();
    convenient.section_title1("a").section_title2("b").section_title3("c");
    assert_eq!(explicit.as_str(), convenient.as_str());
}

#[test]
#[should_panic(expected = "out of range")]
fn test_section_title_level_zero_panics() {
    AsciiDoc::new().section_title("bad", 0);
}

#[test]
fn test_raw_text_and_newline() {
    let mut doc = AsciiDoc::new();
    doc.raw_text("Pets API").newline().newline();
    assert_eq!(doc.as_str(), "Pets API\n\n");
}

#[test]
fn test_include() {
    let mut doc = AsciiDoc::new();
    doc.include("petstore-paths.adoc");
    assert_eq!(doc.as_str(), "include::petstore-paths.adoc[]\n\n");
}

#[test]
fn test_listing_block_adds_missing_trailing_newline() {
    let mut doc = AsciiDoc::new();
    doc.listing_block("{\n  \"type\": \"object\"\n}");
    assert_eq!(doc.as_str(), "----\n{\n  \"type\": \"object\"\n}\n----\n\n");

    let mut doc = AsciiDoc::new();
    doc.listing_block("already terminated\n");
    assert_eq!(doc.as_str(), "----\nalready terminated\n----\n\n");
}

#[test]
fn test_block_title() {
    let mut doc = AsciiDoc::new();
    doc.block_title("Parameters");
    assert_eq!(doc.as_str(), ".Parameters\n");
}

#[test]
fn test_table_pads_short_rows() {
    let mut doc = AsciiDoc::new();
    doc.table(
        &["Name", "Type"],
        &[vec!["id".to_string(), "string".to_string()], vec!["tag".to_string()]],
    );
    let text = doc.as_str();
    assert!(text.starts_with("[options=\"header\"]\n|===\n|Name |Type \n"));
    assert!(text.contains("\n|id\n|string\n"));
    assert!(text.contains("\n|tag\n|\n"));
    assert!(text.ends_with("|===\n\n"));
}

#[test]
fn test_mono_and_bold() {
    assert_eq!(mono("/pets"), "`/pets`");
    assert_eq!(bold("required"), "*required*");
}

#[test]
fn test_to_file_writes_buffer_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = AsciiDoc::new();
    doc.section_title1("Paths").include("x.adoc");
    doc.to_file(dir.path(), "out.adoc").unwrap();
    let written = fs::read_to_string(dir.path().join("out.adoc")).unwrap();
    assert_eq!(written, doc.as_str());
}

#[test]
fn test_normalize_name_sanitizes_segments() {
    assert_eq!(normalize_name(&["petstore", "index"]), "petstore-index");
    assert_eq!(normalize_name(&["petstore", "paths", "/pets"]), "petstore-paths-pets");
    assert_eq!(normalize_name(&["API", "Paths"]), "api-paths");
    assert_eq!(normalize_name(&["a", "1.0"]), "a-1.0");
    assert_eq!(normalize_name(&["a", "users/{id}/posts"]), "a-users-id-posts");
}

#[test]
fn test_normalize_name_drops_empty_segments() {
    assert_eq!(normalize_name(&["petstore", "//"]), "petstore");
    assert_eq!(normalize_name(&["", "paths"]), "paths");
    assert_eq!(normalize_name::<&str>(&[]), "");
}

#[test]
fn test_normalize_name_is_not_injective() {
    assert_eq!(normalize_name(&["a", "/pets"]), normalize_name(&["a", "pets"]));
}
