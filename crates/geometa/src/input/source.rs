//! Metadata source classification.

use std::fmt;
use std::path::{Path, PathBuf};

/// Prefixes that mark a source string as a remote URL.
const URL_PREFIXES: &[&str] = &["http", "ftp"];

/// Where a metadata record is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Remote record, fetched over the network.
    Url(String),
    /// Record on the local filesystem.
    File(PathBuf),
}

impl Source {
    /// Classify a path-or-URL string.
    ///
    /// Anything starting with `http` or `ftp` is treated as a URL; every
    /// other string is a filesystem path. The match is a plain prefix test,
    /// so a relative path such as `httpdocs/record.xml` is also a URL.
    pub fn parse(value: &str) -> Self {
        if URL_PREFIXES.iter().any(|p| value.starts_with(p)) {
            Source::Url(value.to_string())
        } else {
            Source::File(PathBuf::from(value))
        }
    }

    /// Whether this source is fetched over the network.
    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Url(_))
    }

    /// The filesystem path, if this is a local source.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Source::File(path) => Some(path),
            Source::Url(_) => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}
