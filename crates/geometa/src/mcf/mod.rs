//! Metadata control file (MCF) model and YAML output.

mod document;
mod emit;

pub use document::{McfDocument, McfHeader, McfMetadata, Section, MCF_VERSION};
