//! # AsciiDoc Module
//!
//! Minimal AsciiDoc assembly primitive used by the generator.
//!
//! [`AsciiDoc`] accumulates structural markup through append calls — titles,
//! section headings, raw text, block titles, listing blocks, tables, and
//! include directives — and serializes the result to a file. It knows nothing
//! about the API model; the generator decides what to append and where each
//! document lands.
//!
//! [`normalize_name`] derives filesystem- and include-safe identifiers from
//! user-supplied segments. Normalization is lossy by design (distinct inputs
//! may normalize identically); the generator guards against output-file
//! collisions, not this module.

mod builder;
mod names;

#[cfg(test)]
mod tests;

pub use builder::{bold, mono, AsciiDoc};
pub use names::normalize_name;
