//! ISO 19139 (and HNAP profile) metadata parsing.
//!
//! Only the record-level fields the importer copies into an MCF are read.
//! Nothing is validated against the ISO schema: absent elements simply come
//! back as `None`.

mod decode;
mod metadata;
mod xml;

pub use metadata::{Locale, MdMetadata};
pub use xml::{GCO, GMD, GMI};
