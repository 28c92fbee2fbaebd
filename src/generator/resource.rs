//! Resource and operation document emission.
//!
//! A resource document is an aggregate: every present section — resource
//! schema, CRUD/patch operations, actions, queries — is written to its own
//! file and included, in the fixed order below. Absent operations and empty
//! action/query collections produce no heading and no file.

use crate::asciidoc::{mono, AsciiDoc};
use crate::descriptor::{ApiError, Operation, Parameter, Query, Resource, Schema};

use super::{DocGenError, DocRun};

impl DocRun<'_> {
    /// Emits the resource document and its per-section files; returns the
    /// resource filename for inclusion by the path or version document.
    pub(crate) fn output_resource(
        &mut self,
        resource: &Resource,
        parent_level: usize,
        parent_namespace: &str,
    ) -> Result<String, DocGenError> {
        let namespace = self.claim(&[parent_namespace, "resource"])?;
        let level = parent_level + 1;
        let mut doc = AsciiDoc::new();

        if let Some(schema) = resource.schema() {
            let file = self.output_resource_schema(schema, level, &namespace)?;
            doc.include(&file);
        }

        let operations = [
            ("Create", "create", resource.create()),
            ("Read", "read", resource.read()),
            ("Update", "update", resource.update()),
            ("Delete", "delete", resource.delete()),
            ("Patch", "patch", resource.patch()),
        ];
        for (title, slug, operation) in operations {
            if let Some(operation) = operation {
                let file = self.output_operation(title, slug, operation, level, &namespace)?;
                doc.include(&file);
            }
        }

        if !resource.actions().is_empty() {
            doc.section_title("Actions", level);
            for (name, operation) in resource.actions() {
                let file = self.output_action(name, operation, level + 1, &namespace)?;
                doc.include(&file);
            }
        }

        if !resource.queries().is_empty() {
            doc.section_title("Queries", level);
            for (name, query) in resource.queries() {
                let file = self.output_query(name, query, level + 1, &namespace)?;
                doc.include(&file);
            }
        }

        self.write(&doc, &namespace)
    }

    fn output_resource_schema(
        &mut self,
        schema: &Schema,
        level: usize,
        parent_namespace: &str,
    ) -> Result<String, DocGenError> {
        let namespace = self.claim(&[parent_namespace, "schema"])?;
        let mut doc = AsciiDoc::new();
        doc.section_title("Resource Schema", level);
        doc.listing_block(&schema.to_pretty_json());
        self.write(&doc, &namespace)
    }

    fn output_operation(
        &mut self,
        title: &str,
        slug: &str,
        operation: &Operation,
        level: usize,
        parent_namespace: &str,
    ) -> Result<String, DocGenError> {
        let namespace = self.claim(&[parent_namespace, slug])?;
        let mut doc = AsciiDoc::new();
        doc.section_title(title, level);
        render_operation_body(&mut doc, operation);
        self.write(&doc, &namespace)
    }

    fn output_action(
        &mut self,
        name: &str,
        operation: &Operation,
        level: usize,
        parent_namespace: &str,
    ) -> Result<String, DocGenError> {
        let namespace = self.claim(&[parent_namespace, "actions", name])?;
        let mut doc = AsciiDoc::new();
        doc.section_title(&mono(name), level);
        render_operation_body(&mut doc, operation);
        self.write(&doc, &namespace)
    }

    fn output_query(
        &mut self,
        name: &str,
        query: &Query,
        level: usize,
        parent_namespace: &str,
    ) -> Result<String, DocGenError> {
        let namespace = self.claim(&[parent_namespace, "queries", name])?;
        let mut doc = AsciiDoc::new();
        doc.section_title(&mono(name), level);
        if !query.queryable_fields.is_empty() {
            doc.block_title("Queryable fields");
            let fields = query
                .queryable_fields
                .iter()
                .map(|field| mono(field))
                .collect::<Vec<_>>()
                .join(", ");
            doc.raw_text(&fields);
            doc.newline().newline();
        }
        render_operation_body(&mut doc, &query.operation);
        self.write(&doc, &namespace)
    }
}

/// Renders the body shared by every operation kind: description, parameter
/// table, request/response schema listings, and declared errors. Absent
/// pieces are skipped, never rendered empty.
fn render_operation_body(doc: &mut AsciiDoc, operation: &Operation) {
    if let Some(description) = &operation.description {
        doc.raw_text(description);
        doc.newline().newline();
    }
    if !operation.parameters.is_empty() {
        doc.block_title("Parameters");
        let rows = operation
            .parameters
            .iter()
            .map(parameter_row)
            .collect::<Vec<_>>();
        doc.table(&["Name", "Source", "Type", "Required", "Description"], &rows);
    }
    if let Some(request) = &operation.request {
        doc.block_title("Request schema");
        doc.listing_block(&request.to_pretty_json());
    }
    if let Some(response) = &operation.response {
        doc.block_title("Response schema");
        doc.listing_block(&response.to_pretty_json());
    }
    if !operation.errors.is_empty() {
        doc.block_title("Errors");
        let rows = operation.errors.iter().map(error_row).collect::<Vec<_>>();
        doc.table(&["Code", "Description"], &rows);
    }
}

fn parameter_row(parameter: &Parameter) -> Vec<String> {
    vec![
        mono(&parameter.name),
        parameter.source.to_string(),
        parameter.data_type.clone().unwrap_or_default(),
        if parameter.required { "yes" } else { "no" }.to_string(),
        parameter.description.clone().unwrap_or_default(),
    ]
}

fn error_row(error: &ApiError) -> Vec<String> {
    vec![
        error.code.to_string(),
        error.description.clone().unwrap_or_default(),
    ]
}
