//! # Generator Module
//!
//! The generator walks one validated [`ApiDescription`] and emits a
//! directory of cross-referencing AsciiDoc documents: one file per
//! structural node (path, version, resource, operation, catalog entry), one
//! aggregate file per collection, and a root file that transitively includes
//! everything else.
//!
//! ## Generation order
//!
//! Documents are written leaf-most first. A parent document gains an
//! `include::` directive only after the included child file has been
//! written, so a partially failed run never leaves a parent referencing a
//! file that was never created. Section levels are always derived from the
//! parent (parent level + 1), never from a fixed starting depth.
//!
//! ## Naming
//!
//! Every document's filename is its namespace — the normalized chain of
//! segment names from the API id down — plus the `.adoc` extension (see
//! [`crate::asciidoc::normalize_name`]). Normalization is lossy, so each run
//! tracks every claimed namespace and fails with
//! [`DocGenError::NamingCollision`] before a second write to the same file
//! could occur.
//!
//! ## Output structure
//!
//! For a flat descriptor with id `petstore` and path `/pets`:
//!
//! ```text
//! petstore-index.adoc                        # root, includes the aggregates
//! petstore-paths.adoc                        # paths aggregate
//! petstore-paths-pets.adoc                   # one file per path
//! petstore-paths-pets-resource.adoc          # resource, includes operations
//! petstore-paths-pets-resource-read.adoc     # one file per operation
//! petstore-definitions.adoc                  # definitions aggregate
//! petstore-definitions-pet.adoc              # one file per schema
//! petstore-errors.adoc                       # errors aggregate, same pattern
//! ```
//!
//! Versioned descriptors add one level between the path file and the
//! resource file.
//!
//! ## Guarantees
//!
//! Generation is single-threaded, synchronous, and deterministic: the same
//! descriptor always produces a byte-identical tree, and re-running into a
//! populated directory overwrites without error. Output is **not**
//! transactional: a failed run leaves already-written files on disk, and
//! nothing is rolled back. No state survives an [`ApiDocGenerator::execute`]
//! call; concurrent runs into one directory must be serialized by the
//! caller.

mod catalog;
mod error;
mod resource;

#[cfg(test)]
mod tests;

pub use error::DocGenError;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::asciidoc::{mono, normalize_name, AsciiDoc};
use crate::descriptor::{ApiDescription, Paths, Resource, VersionedPath};

/// Generates static AsciiDoc documentation for API descriptors.
#[derive(Debug)]
pub struct ApiDocGenerator {
    output_dir: PathBuf,
}

impl ApiDocGenerator {
    /// Creates a generator rooted at `output_dir`, creating the directory if
    /// it does not exist.
    ///
    /// Fails with [`DocGenError::Configuration`] when the path exists and is
    /// not a directory, cannot be created, or is not writable.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, DocGenError> {
        let output_dir = output_dir.into();
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(DocGenError::Configuration {
                path: output_dir,
                reason: "exists and is not a directory".to_string(),
            });
        }
        if let Err(err) = fs::create_dir_all(&output_dir) {
            return Err(DocGenError::Configuration {
                path: output_dir,
                reason: format!("cannot be created: {err}"),
            });
        }
        match fs::metadata(&output_dir) {
            Ok(metadata) if metadata.permissions().readonly() => {
                return Err(DocGenError::Configuration {
                    path: output_dir,
                    reason: "is not writable".to_string(),
                });
            }
            Err(err) => {
                return Err(DocGenError::Configuration {
                    path: output_dir,
                    reason: format!("cannot be inspected: {err}"),
                });
            }
            Ok(_) => {}
        }
        Ok(ApiDocGenerator { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generates the full document tree for one API description.
    ///
    /// The descriptor is only read. On failure, files written before the
    /// error remain on disk.
    pub fn execute(&self, api: &ApiDescription) -> Result<(), DocGenError> {
        let mut run = DocRun::new(&self.output_dir);

        let paths_file = match api.paths() {
            Some(Paths::Flat(entries)) => run.output_flat_paths(entries, api.id())?,
            Some(Paths::Versioned(entries)) => run.output_versioned_paths(entries, api.id())?,
            None => None,
        };
        let definitions_file = match api.definitions() {
            Some(definitions) => Some(run.output_definitions(definitions, api.id())?),
            None => None,
        };
        let errors_file = match api.errors() {
            Some(errors) => Some(run.output_errors(errors, api.id())?),
            None => None,
        };
        run.output_root(
            api,
            paths_file.as_deref(),
            definitions_file.as_deref(),
            errors_file.as_deref(),
        )?;

        info!(
            id = %api.id(),
            dir = %self.output_dir.display(),
            files = run.claimed.len(),
            "generated api documentation"
        );
        Ok(())
    }
}

/// State for one generation run: the output directory and the namespaces
/// claimed so far. Dropped when `execute` returns; nothing carries over.
pub(crate) struct DocRun<'a> {
    output_dir: &'a Path,
    claimed: HashMap<String, String>,
}

impl<'a> DocRun<'a> {
    pub(crate) fn new(output_dir: &'a Path) -> Self {
        DocRun {
            output_dir,
            claimed: HashMap::new(),
        }
    }

    /// Reserves the namespace derived from `parts` for exactly one output
    /// file, failing fast when two distinct segment chains normalize to the
    /// same name.
    pub(crate) fn claim(&mut self, parts: &[&str]) -> Result<String, DocGenError> {
        let namespace = normalize_name(parts);
        let source = parts.join("/");
        if let Some(first) = self.claimed.insert(namespace.clone(), source.clone()) {
            return Err(DocGenError::NamingCollision {
                filename: format!("{namespace}.adoc"),
                first,
                second: source,
            });
        }
        Ok(namespace)
    }

    /// Serializes one document under its claimed namespace and returns the
    /// filename suitable for include directives.
    pub(crate) fn write(&self, doc: &AsciiDoc, namespace: &str) -> Result<String, DocGenError> {
        let filename = format!("{namespace}.adoc");
        doc.to_file(self.output_dir, &filename)
            .map_err(|source| DocGenError::Io {
                path: self.output_dir.join(&filename),
                source,
            })?;
        debug!(file = %filename, "wrote document");
        Ok(filename)
    }

    /// Emits one file per path plus the aggregate "Paths" file, and returns
    /// the aggregate filename. An empty table emits nothing, exactly like an
    /// absent one.
    fn output_flat_paths(
        &mut self,
        entries: &BTreeMap<String, Resource>,
        parent_namespace: &str,
    ) -> Result<Option<String>, DocGenError> {
        if entries.is_empty() {
            return Ok(None);
        }
        let all_namespace = self.claim(&[parent_namespace, "paths"])?;
        let mut all_doc = AsciiDoc::new();
        all_doc.section_title1("Paths");

        for (path_name, resource) in entries {
            let path_namespace = self.claim(&[all_namespace.as_str(), path_name.as_str()])?;
            let mut path_doc = AsciiDoc::new();
            path_doc.section_title2(&mono(path_name));

            let resource_file = self.output_resource(resource, 2, &path_namespace)?;
            path_doc.include(&resource_file);

            let path_file = self.write(&path_doc, &path_namespace)?;
            all_doc.include(&path_file);
        }

        Ok(Some(self.write(&all_doc, &all_namespace)?))
    }

    /// As [`Self::output_flat_paths`], with a per-version file between each
    /// path file and its resource file.
    fn output_versioned_paths(
        &mut self,
        entries: &BTreeMap<String, VersionedPath>,
        parent_namespace: &str,
    ) -> Result<Option<String>, DocGenError> {
        if entries.is_empty() {
            return Ok(None);
        }
        let all_namespace = self.claim(&[parent_namespace, "paths"])?;
        let mut all_doc = AsciiDoc::new();
        all_doc.section_title1("Paths");

        for (path_name, versioned_path) in entries {
            let path_namespace = self.claim(&[all_namespace.as_str(), path_name.as_str()])?;
            let mut path_doc = AsciiDoc::new();
            path_doc.section_title2(&mono(path_name));

            for (version, resource) in versioned_path.iter() {
                let version_namespace = self.claim(&[path_namespace.as_str(), version])?;
                let mut version_doc = AsciiDoc::new();
                version_doc.section_title3(&mono(version));

                let resource_file = self.output_resource(resource, 3, &version_namespace)?;
                version_doc.include(&resource_file);

                let version_file = self.write(&version_doc, &version_namespace)?;
                path_doc.include(&version_file);
            }

            let path_file = self.write(&path_doc, &path_namespace)?;
            all_doc.include(&path_file);
        }

        Ok(Some(self.write(&all_doc, &all_namespace)?))
    }

    /// Emits the root document: title, id, description, then one include per
    /// generated summary, in the fixed order paths, definitions, errors.
    fn output_root(
        &mut self,
        api: &ApiDescription,
        paths_file: Option<&str>,
        definitions_file: Option<&str>,
        errors_file: Option<&str>,
    ) -> Result<(), DocGenError> {
        let namespace = self.claim(&[api.id(), "index"])?;
        let mut doc = AsciiDoc::new();
        doc.document_title("API Descriptor");
        doc.section_title1(&format!("ID: {}", mono(api.id())));
        doc.raw_text(api.description());
        doc.newline().newline();

        if let Some(filename) = paths_file {
            doc.include(filename);
        }
        if let Some(filename) = definitions_file {
            doc.include(filename);
        }
        if let Some(filename) = errors_file {
            doc.include(filename);
        }

        self.write(&doc, &namespace)?;
        Ok(())
    }
}
