//! ISO 19139 metadata record.

use std::str::FromStr;

use roxmltree::{Document, Node};
use serde::{Deserialize, Serialize};

use crate::error::{GeometaError, Result};

use super::decode;
use super::xml::{self, GCO, GMD, GMI};

/// A `gmd:PT_Locale` entry describing an alternate language of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// The locale's `id` attribute (e.g. `fra`).
    pub id: Option<String>,
    /// `gmd:languageCode` code list value.
    pub language_code: Option<String>,
    /// `gmd:characterEncoding` code list value.
    pub charset: Option<String>,
}

impl Locale {
    fn from_node(node: Node<'_, '_>) -> Self {
        Self {
            id: xml::attribute(node, "id"),
            language_code: xml::find_code(node, &[(GMD, "languageCode"), (GMD, "LanguageCode")]),
            charset: xml::find_code(
                node,
                &[(GMD, "characterEncoding"), (GMD, "MD_CharacterSetCode")],
            ),
        }
    }
}

/// The subset of an ISO 19139 `MD_Metadata` record that the importer reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MdMetadata {
    /// `gmd:fileIdentifier`.
    pub identifier: Option<String>,
    /// `gmd:language`, as free text or a language code.
    pub language: Option<String>,
    /// `gmd:characterSet` code list value.
    pub charset: Option<String>,
    /// `gmd:hierarchyLevel` scope code.
    pub hierarchy: Option<String>,
    /// `gmd:dateStamp`, either a date or a date-time.
    pub datestamp: Option<String>,
    /// `gmd:dataSetURI`.
    pub dataseturi: Option<String>,
    /// Alternate locales, in document order.
    pub locales: Vec<Locale>,
}

impl MdMetadata {
    /// Parse a record from raw XML bytes.
    ///
    /// The character encoding is taken from a byte order mark or the XML
    /// declaration, defaulting to UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode::decode(bytes)?.parse()
    }

    fn from_node(md: Node<'_, '_>) -> Self {
        let language = xml::find_text(md, &[(GMD, "language"), (GCO, "CharacterString")])
            .or_else(|| xml::find_code(md, &[(GMD, "language"), (GMD, "LanguageCode")]))
            .or_else(|| xml::find_text(md, &[(GMD, "language"), (GMD, "LanguageCode")]));

        let datestamp = xml::find_text(md, &[(GMD, "dateStamp"), (GCO, "Date")])
            .or_else(|| xml::find_text(md, &[(GMD, "dateStamp"), (GCO, "DateTime")]));

        let locales = xml::children(md, (GMD, "locale"))
            .filter_map(|locale| xml::child(locale, (GMD, "PT_Locale")))
            .map(Locale::from_node)
            .collect();

        Self {
            identifier: xml::find_text(md, &[(GMD, "fileIdentifier"), (GCO, "CharacterString")]),
            language,
            charset: xml::find_code(md, &[(GMD, "characterSet"), (GMD, "MD_CharacterSetCode")]),
            hierarchy: xml::find_code(md, &[(GMD, "hierarchyLevel"), (GMD, "MD_ScopeCode")]),
            datestamp,
            dataseturi: xml::find_text(md, &[(GMD, "dataSetURI"), (GCO, "CharacterString")]),
            locales,
        }
    }

    /// Id of the first alternate locale, if any.
    pub fn alternate_language(&self) -> Option<&str> {
        self.locales.first().and_then(|l| l.id.as_deref())
    }
}

impl FromStr for MdMetadata {
    type Err = GeometaError;

    /// Parse a record from XML text.
    fn from_str(text: &str) -> Result<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let doc = Document::parse(text)?;
        let root = metadata_root(&doc);

        let metadata = Self::from_node(root);
        tracing::debug!(
            identifier = metadata.identifier.as_deref().unwrap_or("<none>"),
            locales = metadata.locales.len(),
            "parsed ISO 19139 record"
        );
        Ok(metadata)
    }
}

fn is_metadata_element(node: &Node<'_, '_>) -> bool {
    node.is_element()
        && (node.has_tag_name((GMD, "MD_Metadata")) || node.has_tag_name((GMI, "MI_Metadata")))
}

/// Locate the metadata element: the document element itself, the first
/// `MD_Metadata`/`MI_Metadata` inside a wrapper (e.g. a catalogue response),
/// or the document element when neither is present.
fn metadata_root<'a, 'input>(doc: &'a Document<'input>) -> Node<'a, 'input> {
    let root = doc.root_element();
    if is_metadata_element(&root) {
        return root;
    }

    match root.descendants().find(is_metadata_element) {
        Some(md) => md,
        None => {
            tracing::warn!(
                root = root.tag_name().name(),
                "no MD_Metadata element found, reading fields from the document element"
            );
            root
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<gmd:MD_Metadata xmlns:gmd="http://www.isotc211.org/2005/gmd"
    xmlns:gco="http://www.isotc211.org/2005/gco">{}</gmd:MD_Metadata>"#,
            body
        )
    }

    #[test]
    fn test_language_character_string() {
        let xml = record(
            "<gmd:language><gco:CharacterString>eng; CAN</gco:CharacterString></gmd:language>",
        );
        let md = MdMetadata::from_str(&xml).unwrap();
        assert_eq!(md.language.as_deref(), Some("eng; CAN"));
    }

    #[test]
    fn test_language_code_fallback() {
        let xml = record(
            r#"<gmd:language><gmd:LanguageCode codeList="x" codeListValue="fre">French</gmd:LanguageCode></gmd:language>"#,
        );
        let md = MdMetadata::from_str(&xml).unwrap();
        assert_eq!(md.language.as_deref(), Some("fre"));
    }

    #[test]
    fn test_datestamp_datetime() {
        let xml = record(
            "<gmd:dateStamp><gco:DateTime>2017-03-01T12:00:00</gco:DateTime></gmd:dateStamp>",
        );
        let md = MdMetadata::from_str(&xml).unwrap();
        assert_eq!(md.datestamp.as_deref(), Some("2017-03-01T12:00:00"));
    }

    #[test]
    fn test_empty_record_has_no_fields() {
        let md = MdMetadata::from_str(&record("")).unwrap();
        assert_eq!(md, MdMetadata::default());
        assert_eq!(md.alternate_language(), None);
    }

    #[test]
    fn test_locales_in_document_order() {
        let xml = record(
            r#"<gmd:locale><gmd:PT_Locale id="fra">
                 <gmd:languageCode><gmd:LanguageCode codeListValue="fra"/></gmd:languageCode>
                 <gmd:characterEncoding><gmd:MD_CharacterSetCode codeListValue="utf8"/></gmd:characterEncoding>
               </gmd:PT_Locale></gmd:locale>
               <gmd:locale><gmd:PT_Locale id="spa"/></gmd:locale>"#,
        );
        let md = MdMetadata::from_str(&xml).unwrap();
        assert_eq!(md.locales.len(), 2);
        assert_eq!(md.locales[0].language_code.as_deref(), Some("fra"));
        assert_eq!(md.locales[0].charset.as_deref(), Some("utf8"));
        assert_eq!(md.alternate_language(), Some("fra"));
    }

    #[test]
    fn test_wrapped_record() {
        let xml = r#"<csw:GetRecordByIdResponse xmlns:csw="http://www.opengis.net/cat/csw/2.0.2"
            xmlns:gmd="http://www.isotc211.org/2005/gmd"
            xmlns:gco="http://www.isotc211.org/2005/gco">
          <gmd:MD_Metadata>
            <gmd:fileIdentifier><gco:CharacterString>wrapped</gco:CharacterString></gmd:fileIdentifier>
          </gmd:MD_Metadata>
        </csw:GetRecordByIdResponse>"#;
        let md = MdMetadata::from_str(xml).unwrap();
        assert_eq!(md.identifier.as_deref(), Some("wrapped"));
    }

    #[test]
    fn test_byte_order_mark() {
        let mut bytes = "\u{feff}".as_bytes().to_vec();
        bytes.extend_from_slice(record("").as_bytes());
        assert!(MdMetadata::from_bytes(&bytes).is_ok());
    }

    #[test]
    fn test_malformed_xml() {
        let err = MdMetadata::from_str("<gmd:MD_Metadata>").unwrap_err();
        assert!(matches!(err, GeometaError::Xml(_)));
    }

    #[test]
    fn test_declared_latin1_record() {
        let mut bytes = br#"<?xml version="1.0" encoding="ISO-8859-1"?>
<gmd:MD_Metadata xmlns:gmd="http://www.isotc211.org/2005/gmd"
    xmlns:gco="http://www.isotc211.org/2005/gco">
  <gmd:fileIdentifier><gco:CharacterString>donn"#
            .to_vec();
        bytes.push(0xe9);
        bytes.extend_from_slice(
            b"es</gco:CharacterString></gmd:fileIdentifier>\n</gmd:MD_Metadata>",
        );

        let md = MdMetadata::from_bytes(&bytes).unwrap();
        assert_eq!(md.identifier.as_deref(), Some("donn\u{e9}es"));
    }

    #[test]
    fn test_invalid_utf8() {
        let err = MdMetadata::from_bytes(&[0x3c, 0xff, 0xfe, 0x3e]).unwrap_err();
        assert!(matches!(err, GeometaError::Encoding(_)));
    }
}
