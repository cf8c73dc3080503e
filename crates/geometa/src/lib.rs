//! geometa: import geospatial metadata into metadata control files.
//!
//! An ISO 19139/HNAP XML record is read from a local file or a URL, a fixed
//! set of record-level fields is copied into an MCF (metadata control file)
//! document, and that document is written out as YAML.
//!
//! # Example
//!
//! ```no_run
//! use geometa::{Importer, Iso19139Hnap};
//!
//! let importer = Iso19139Hnap::from_source("https://example.org/csw/record.xml").unwrap();
//! let yaml = importer.export().unwrap();
//!
//! println!("{}", yaml);
//! ```

pub mod error;
pub mod importer;
pub mod input;
pub mod iso;
pub mod mcf;

pub use error::{GeometaError, Result};
pub use importer::{IMPORT_FORMATS, ImportFormat, Importer, Iso19139Hnap};
pub use input::{FetchConfig, Fetcher, HttpFetcher, Source};
pub use iso::{Locale, MdMetadata};
pub use mcf::{MCF_VERSION, McfDocument, McfMetadata};
