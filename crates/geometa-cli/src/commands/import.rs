//! Import command - convert ISO 19139/HNAP XML into an MCF.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use geometa::{Fetcher, GeometaError, HttpFetcher, ImportFormat, Importer, Iso19139Hnap};

pub fn run(
    xml: Option<String>,
    formats: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if formats {
        return execute(None, true, None, &NoFetch, &mut out);
    }

    // Status goes to stderr; stdout may be carrying the YAML.
    if verbose {
        if let Some(ref xml) = xml {
            eprintln!("{}", status_line(xml));
        }
    }

    let fetcher = HttpFetcher::new()?;
    execute(xml.as_deref(), false, output.as_deref(), &fetcher, &mut out)
}

/// Verbose status line announcing what is being imported.
fn status_line(xml: &str) -> String {
    format!(
        "{} {} as {}",
        "Importing".cyan().bold(),
        xml.white(),
        ImportFormat::default().to_string().yellow()
    )
}

/// Run the import against an explicit fetcher and output stream.
pub fn execute(
    xml: Option<&str>,
    formats: bool,
    output: Option<&Path>,
    fetcher: &dyn Fetcher,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    if formats {
        for format in ImportFormat::all() {
            writeln!(out, "{}", format)?;
        }
        return Ok(());
    }

    let Some(xml) = xml else {
        return Err("Missing --xml option".into());
    };

    let mcf = Iso19139Hnap::from_source_with(xml, fetcher)?.export()?;

    match output {
        None => write!(out, "{}", mcf)?,
        Some(path) => {
            fs::write(path, mcf.as_bytes()).map_err(|e| GeometaError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            eprintln!(
                "{} {}",
                "Saved to".green().bold(),
                path.display().to_string().white()
            );
        }
    }

    Ok(())
}

/// Fetcher for code paths that must not read anything.
struct NoFetch;

impl Fetcher for NoFetch {
    fn fetch_url(&self, url: &str) -> geometa::Result<Vec<u8>> {
        Err(GeometaError::Config(format!("unexpected fetch of {}", url)))
    }

    fn fetch_file(&self, path: &Path) -> geometa::Result<Vec<u8>> {
        Err(GeometaError::Config(format!(
            "unexpected read of {}",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"<gmd:MD_Metadata xmlns:gmd="http://www.isotc211.org/2005/gmd"
        xmlns:gco="http://www.isotc211.org/2005/gco">
      <gmd:fileIdentifier><gco:CharacterString>cli-record</gco:CharacterString></gmd:fileIdentifier>
      <gmd:locale><gmd:PT_Locale id="fra"/></gmd:locale>
    </gmd:MD_Metadata>"#;

    /// Serves [`RECORD`] for any source.
    struct StaticFetch;

    impl Fetcher for StaticFetch {
        fn fetch_url(&self, _url: &str) -> geometa::Result<Vec<u8>> {
            Ok(RECORD.as_bytes().to_vec())
        }

        fn fetch_file(&self, _path: &Path) -> geometa::Result<Vec<u8>> {
            Ok(RECORD.as_bytes().to_vec())
        }
    }

    #[test]
    fn test_formats_lists_single_format() {
        let mut out = Vec::new();
        execute(Some("ignored.xml"), true, None, &NoFetch, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "iso19139-hnap\n");
        assert_eq!(geometa::IMPORT_FORMATS, "iso19139-hnap");
    }

    #[test]
    fn test_missing_xml_is_rejected_before_fetch() {
        let mut out = Vec::new();
        let err = execute(None, false, None, &NoFetch, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "Missing --xml option");
        assert!(out.is_empty());
    }

    #[test]
    fn test_import_to_stdout() {
        let mut out = Vec::new();
        execute(Some("record.xml"), false, None, &StaticFetch, &mut out).unwrap();

        let yaml = String::from_utf8(out).unwrap();
        assert!(yaml.starts_with("%YAML 1.1\n---\n"));
        assert!(yaml.contains("identifier: cli-record"));
        assert!(yaml.contains("language_alternate: fra"));
    }

    #[test]
    fn test_import_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.yml");

        let mut out = Vec::new();
        execute(Some("record.xml"), false, Some(path.as_path()), &StaticFetch, &mut out).unwrap();

        assert!(out.is_empty());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("identifier: cli-record"));
        assert!(written.contains("distribution: {}"));
    }

    #[test]
    fn test_status_line_names_source_and_format() {
        colored::control::set_override(false);
        assert_eq!(
            status_line("https://example.org/a.xml"),
            "Importing https://example.org/a.xml as iso19139-hnap"
        );
    }

    #[test]
    fn test_fetch_errors_propagate() {
        let mut out = Vec::new();
        let err = execute(Some("https://example.org/a.xml"), false, None, &NoFetch, &mut out)
            .unwrap_err();
        assert!(err.to_string().contains("unexpected fetch"));
    }
}
