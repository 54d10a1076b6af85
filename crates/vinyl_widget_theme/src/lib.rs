//! Theme data model for the vinyl widget.
//!
//! A theme bundles a track, the disc artwork and label, a background mode,
//! a font and a semantic palette. Themes are declared in JSON and kept in an
//! ordered [`ThemeRegistry`].

mod schema;
pub use schema::*;

mod deserializers;

mod registry;
pub use registry::*;
