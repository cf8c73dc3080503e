//! Importers: turn an external metadata format into an MCF document.

mod format;
mod hnap;

pub use format::{ImportFormat, IMPORT_FORMATS};
pub use hnap::Iso19139Hnap;

use crate::error::Result;
use crate::mcf::McfDocument;

/// Converts one external metadata format into an MCF document.
pub trait Importer {
    /// The format this importer reads.
    fn format(&self) -> ImportFormat;

    /// The populated MCF document.
    fn mcf(&self) -> &McfDocument;

    /// Export the MCF document as YAML.
    fn export(&self) -> Result<String> {
        self.mcf().to_yaml()
    }
}
