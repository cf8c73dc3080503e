//! Supported import formats.

use std::fmt;

/// Names of every supported import format, as listed by `--formats`.
pub const IMPORT_FORMATS: &str = "iso19139-hnap";

/// A metadata format the importer can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportFormat {
    /// ISO 19139 with the Harmonized North American Profile.
    #[default]
    Iso19139Hnap,
}

impl ImportFormat {
    /// Every supported format.
    pub fn all() -> &'static [ImportFormat] {
        &[ImportFormat::Iso19139Hnap]
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportFormat::Iso19139Hnap => write!(f, "iso19139-hnap"),
        }
    }
}
