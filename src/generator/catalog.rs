//! Definitions- and errors-catalog document emission.
//!
//! Both catalogs follow the aggregate pattern used for paths: one file per
//! entry, written first, then an aggregate file that includes each entry in
//! lexicographic order.

use crate::asciidoc::{mono, AsciiDoc};
use crate::descriptor::{Definitions, Errors};

use super::{DocGenError, DocRun};

impl DocRun<'_> {
    pub(crate) fn output_definitions(
        &mut self,
        definitions: &Definitions,
        parent_namespace: &str,
    ) -> Result<String, DocGenError> {
        let all_namespace = self.claim(&[parent_namespace, "definitions"])?;
        let mut all_doc = AsciiDoc::new();
        all_doc.section_title1("Definitions");

        for (name, schema) in definitions.iter() {
            let namespace = self.claim(&[all_namespace.as_str(), name])?;
            let mut doc = AsciiDoc::new();
            doc.section_title2(&mono(name));
            doc.listing_block(&schema.to_pretty_json());
            let file = self.write(&doc, &namespace)?;
            all_doc.include(&file);
        }

        self.write(&all_doc, &all_namespace)
    }

    pub(crate) fn output_errors(
        &mut self,
        errors: &Errors,
        parent_namespace: &str,
    ) -> Result<String, DocGenError> {
        let all_namespace = self.claim(&[parent_namespace, "errors"])?;
        let mut all_doc = AsciiDoc::new();
        all_doc.section_title1("Errors");

        for (name, error) in errors.iter() {
            let namespace = self.claim(&[all_namespace.as_str(), name])?;
            let mut doc = AsciiDoc::new();
            doc.section_title2(&mono(name));
            doc.raw_text(&format!("HTTP code: {}", mono(&error.code.to_string())));
            doc.newline().newline();
            if let Some(description) = &error.description {
                doc.raw_text(description);
                doc.newline().newline();
            }
            if let Some(schema) = &error.schema {
                doc.block_title("Detail schema");
                doc.listing_block(&schema.to_pretty_json());
            }
            let file = self.write(&doc, &namespace)?;
            all_doc.include(&file);
        }

        self.write(&all_doc, &all_namespace)
    }
}
