//! # apidoc
//!
//! **apidoc** generates static [AsciiDoc](https://asciidoc.org/) documentation
//! from a hierarchical description of an HTTP-style API.
//!
//! ## Overview
//!
//! An API descriptor is a validated, immutable object graph: a table of paths
//! (flat, or versioned one level deeper), each resolving to a resource with
//! CRUD operations, named actions, and named queries, plus optional global
//! schema definitions and an error catalog. The generator walks that graph
//! and emits one document per structural node — leaf-most documents first, so
//! every include directive written into a parent refers to a file that
//! already exists — and finally a root document that transitively includes
//! everything else.
//!
//! ## Architecture
//!
//! - **[`descriptor`]** - API-description model, builders, and the JSON/YAML
//!   descriptor loader
//! - **[`asciidoc`]** - AsciiDoc document builder and output-name
//!   normalization
//! - **[`generator`]** - the document generator that turns one
//!   [`ApiDescription`] into a directory of cross-referencing `.adoc` files
//! - **[`cli`]** - command-line interface backing the `apidoc-gen` binary
//!
//! ## Usage
//!
//! ```rust,ignore
//! use apidoc::{load_descriptor, ApiDocGenerator};
//!
//! # fn main() -> anyhow::Result<()> {
//! let api = load_descriptor("petstore.json".as_ref())?;
//! let generator = ApiDocGenerator::new("doc/api")?;
//! generator.execute(&api)?;
//! # Ok(())
//! # }
//! ```
//!
//! Or from the command line:
//!
//! ```bash
//! apidoc-gen generate --descriptor petstore.json --output doc/api
//! ```

pub mod asciidoc;
pub mod cli;
pub mod descriptor;
pub mod generator;

pub use descriptor::{
    load_descriptor, ApiDescription, Definitions, Errors, Paths, Resource, ValidationError,
    VersionedPath,
};
pub use generator::{ApiDocGenerator, DocGenError};
