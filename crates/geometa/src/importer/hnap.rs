//! ISO 19139 / HNAP importer.

use std::fmt;

use crate::error::Result;
use crate::input::{Fetcher, HttpFetcher, Source};
use crate::iso::MdMetadata;
use crate::mcf::{McfDocument, McfMetadata};

use super::format::ImportFormat;
use super::Importer;

/// Imports an ISO 19139/HNAP record into an MCF document.
///
/// The MCF is built once, at construction, and never changes afterwards.
///
/// # Example
///
/// ```no_run
/// use geometa::{Importer, Iso19139Hnap};
///
/// let importer = Iso19139Hnap::from_source("records/hnap_sample.xml").unwrap();
/// println!("{}", importer.export().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Iso19139Hnap {
    metadata: MdMetadata,
    mcf: McfDocument,
}

impl Iso19139Hnap {
    /// Import from a path or `http`/`ftp` URL using the default fetcher.
    pub fn from_source(source: &str) -> Result<Self> {
        let fetcher = HttpFetcher::new()?;
        Self::from_source_with(source, &fetcher)
    }

    /// Import from a path or URL, reading it through `fetcher`.
    pub fn from_source_with(source: &str, fetcher: &dyn Fetcher) -> Result<Self> {
        let source = Source::parse(source);
        tracing::debug!(%source, remote = source.is_remote(), "importing metadata");

        let bytes = fetcher.fetch(&source)?;
        Self::from_bytes(&bytes)
    }

    /// Import from an already-fetched XML document.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_metadata(MdMetadata::from_bytes(bytes)?))
    }

    /// Build the MCF from a parsed record.
    pub fn from_metadata(metadata: MdMetadata) -> Self {
        let mut mcf = McfDocument::new();
        mcf.metadata = McfMetadata {
            identifier: metadata.identifier.clone(),
            language: metadata.language.clone(),
            language_alternate: metadata.alternate_language().map(str::to_string),
            charset: metadata.charset.clone(),
            hierarchylevel: metadata.hierarchy.clone(),
            datestamp: metadata.datestamp.clone(),
            dataseturi: metadata.dataseturi.clone(),
        };

        Self { metadata, mcf }
    }

    /// The parsed source record.
    pub fn metadata(&self) -> &MdMetadata {
        &self.metadata
    }
}

impl Importer for Iso19139Hnap {
    fn format(&self) -> ImportFormat {
        ImportFormat::Iso19139Hnap
    }

    fn mcf(&self) -> &McfDocument {
        &self.mcf
    }
}

impl fmt::Display for Iso19139Hnap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<ISO19139HNAP instance>")
    }
}
