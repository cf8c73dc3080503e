//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// geometa: geospatial metadata tooling
#[derive(Parser)]
#[command(name = "geometa")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import XML metadata into MCF format
    Import {
        /// Path to XML metadata (filepath or URL)
        #[arg(long, value_name = "PATH_OR_URL", required_unless_present = "formats")]
        xml: Option<String>,

        /// List supported import formats
        #[arg(long)]
        formats: bool,

        /// Name of output file (default: standard output)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_import_requires_xml() {
        let err = Cli::try_parse_from(["geometa", "import"]).err().expect("expected usage error");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_formats_without_xml() {
        let cli = Cli::try_parse_from(["geometa", "import", "--formats"]).unwrap();
        match cli.command {
            Commands::Import { xml, formats, .. } => {
                assert!(formats);
                assert!(xml.is_none());
            }
        }
    }

    #[test]
    fn test_import_with_output() {
        let cli = Cli::try_parse_from([
            "geometa",
            "import",
            "--xml",
            "https://example.org/record.xml",
            "--output",
            "record.yml",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Import { xml, output, .. } => {
                assert_eq!(xml.as_deref(), Some("https://example.org/record.xml"));
                assert_eq!(output, Some(PathBuf::from("record.yml")));
            }
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
