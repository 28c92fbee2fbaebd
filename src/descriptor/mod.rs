//! # Descriptor Module
//!
//! Validated, immutable model of an API description.
//!
//! The model mirrors the shape of the generated documentation: an
//! [`ApiDescription`] owns an optional path table ([`Paths`], flat or
//! versioned — the variant is fixed at construction), an optional schema
//! catalog ([`Definitions`]), and an optional error catalog ([`Errors`]).
//! Every name-keyed collection is a `BTreeMap`, so iteration order (and with
//! it, generated output order) is lexicographic by construction.
//!
//! All types are built through single-use builders that enforce the model
//! invariants — non-empty, whitespace-free, unique names — and fail with
//! [`ValidationError`] at construction time. Once built, the model is never
//! mutated; the generator only reads it.
//!
//! ## Descriptor files
//!
//! [`load_descriptor`] reads a descriptor from a JSON or YAML file. Each
//! path entry is explicitly tagged as flat (`resource`) or versioned
//! (`versions`), and one file may not mix the two forms:
//!
//! ```json
//! {
//!   "id": "petstore",
//!   "description": "Pets API",
//!   "paths": {
//!     "/pets": {
//!       "resource": {
//!         "read": { "description": "Returns a pet." }
//!       }
//!     }
//!   },
//!   "definitions": {
//!     "pet": { "type": "object" }
//!   },
//!   "errors": {
//!     "notFound": { "code": 404, "description": "No such pet." }
//!   }
//! }
//! ```

mod api;
mod catalog;
mod load;
mod paths;
mod resource;
mod types;

pub use api::{ApiDescription, ApiDescriptionBuilder};
pub use catalog::{Definitions, DefinitionsBuilder, Errors, ErrorsBuilder};
pub use load::load_descriptor;
pub use paths::{FlatPathsBuilder, Paths, VersionedPath, VersionedPathBuilder, VersionedPathsBuilder};
pub use resource::{Resource, ResourceBuilder};
pub use types::{ApiError, Operation, Parameter, ParameterSource, Query, Schema, ValidationError};
