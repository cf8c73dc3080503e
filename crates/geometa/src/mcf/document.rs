//! The metadata control file document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::emit;

/// MCF schema version written into every document.
pub const MCF_VERSION: &str = "1.0.0";

/// YAML directive and document marker that open every exported MCF.
const YAML_PREAMBLE: &str = "%YAML 1.1\n---\n";

/// An open-ended MCF section; key order is preserved on output.
pub type Section = IndexMap<String, serde_yaml::Value>;

/// The `mcf` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McfHeader {
    pub version: String,
}

impl Default for McfHeader {
    fn default() -> Self {
        Self {
            version: MCF_VERSION.to_string(),
        }
    }
}

/// The `metadata` section. Field order here is the output key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct McfMetadata {
    pub identifier: Option<String>,
    pub language: Option<String>,
    pub language_alternate: Option<String>,
    pub charset: Option<String>,
    pub hierarchylevel: Option<String>,
    pub datestamp: Option<String>,
    pub dataseturi: Option<String>,
}

/// A metadata control file.
///
/// Sections serialize in declaration order: `mcf`, `metadata`, `spatial`,
/// `identification`, `distribution`. The last three are always emitted, even
/// when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct McfDocument {
    pub mcf: McfHeader,
    pub metadata: McfMetadata,
    pub spatial: Section,
    pub identification: Section,
    pub distribution: Section,
}

impl McfDocument {
    /// Create an empty document carrying only the MCF version.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the document as YAML 1.1 text.
    ///
    /// Keys keep their declaration order and non-ASCII text is written as-is.
    /// Strings a YAML 1.1 reader would load as another type (dates, `no`,
    /// sexagesimal numbers) are single-quoted.
    pub fn to_yaml(&self) -> Result<String> {
        let value = serde_yaml::to_value(self)?;
        Ok(format!("{}{}", YAML_PREAMBLE, emit::to_string(&value)))
    }

    /// Parse a document previously produced by [`McfDocument::to_yaml`].
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
