//! Character decoding of raw XML bytes.
//!
//! The encoding comes from, in order: a byte order mark, a BOM-less UTF-16
//! `<?xml` prefix, the `encoding` pseudo-attribute of the XML declaration,
//! and finally UTF-8.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

use crate::error::{GeometaError, Result};

/// How far into the document to look for the end of the XML declaration.
const DECLARATION_LIMIT: usize = 1024;

/// Decode `bytes` to text ready for the XML parser.
///
/// When the document was not UTF-8 its XML declaration is dropped, since it
/// names an encoding the decoded text no longer has.
pub fn decode(bytes: &[u8]) -> Result<Cow<'_, str>> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (sniff(bytes)?, bytes),
    };

    let text = encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| {
            GeometaError::Encoding(format!("document is not valid {}", encoding.name()))
        })?;

    if encoding == UTF_8 {
        return Ok(text);
    }

    tracing::debug!(encoding = encoding.name(), "decoded non-UTF-8 metadata");
    Ok(Cow::Owned(strip_declaration(&text).to_string()))
}

fn sniff(bytes: &[u8]) -> Result<&'static Encoding> {
    if bytes.starts_with(&[0x3c, 0x00, 0x3f, 0x00]) {
        return Ok(UTF_16LE);
    }
    if bytes.starts_with(&[0x00, 0x3c, 0x00, 0x3f]) {
        return Ok(UTF_16BE);
    }

    match declared_encoding(bytes) {
        None => Ok(UTF_8),
        Some(label) => match Encoding::for_label(label.as_bytes()) {
            // An ASCII-readable declaration cannot really be UTF-16.
            Some(encoding) if encoding == UTF_16LE || encoding == UTF_16BE => Ok(UTF_8),
            Some(encoding) => Ok(encoding),
            None => Err(GeometaError::Encoding(format!(
                "unsupported encoding '{}'",
                label
            ))),
        },
    }
}

/// The `encoding` value of a leading `<?xml ... ?>` declaration.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(DECLARATION_LIMIT)];
    if !head.starts_with(b"<?xml") {
        return None;
    }

    let end = head.windows(2).position(|w| w == b"?>")?;
    let declaration = String::from_utf8_lossy(&head[..end]);

    let rest = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &rest[1..];
    let close = value.find(quote)?;

    Some(value[..close].trim().to_string())
}

fn strip_declaration(text: &str) -> &str {
    if text.starts_with("<?xml") {
        if let Some(end) = text.find("?>") {
            return &text[end + 2..];
        }
    }
    text
}
