//! # CLI Module
//!
//! Command-line interface backing the `apidoc-gen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate AsciiDoc documentation from an API descriptor:
//!
//! ```bash
//! apidoc-gen generate --descriptor petstore.json --output doc/api
//! ```
//!
//! ### `check`
//!
//! Load and validate a descriptor without writing any files:
//!
//! ```bash
//! apidoc-gen check --descriptor petstore.json
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands};
