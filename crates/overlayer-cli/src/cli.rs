use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Compute pixel bounding boxes for analyzed documents and report page sizes.
#[derive(Debug, Parser)]
#[command(name = "overlayer", about, version)]
pub struct Cli {
    /// Log resolver and extractor activity to stderr (honors RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the pixel size of every page of a PDF or image
    Dims {
        /// Path to the PDF or image file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Size PDF pages by their CropBox instead of their MediaBox
        #[arg(long)]
        crop_box: bool,

        /// Ignore the /Rotate entry of PDF pages
        #[arg(long)]
        no_rotation: bool,
    },

    /// Scale an analysis result to pixel bounding boxes
    Boxes {
        /// Path to the PDF or image file that was analyzed
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Path to the analysis result as JSON
        #[arg(long, value_name = "JSON")]
        document: PathBuf,

        /// Comma-separated feature types (line, word, form, key, value, table, cell, queries)
        #[arg(long, default_value = "line")]
        features: String,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Size PDF pages by their CropBox instead of their MediaBox
        #[arg(long)]
        crop_box: bool,

        /// Ignore the /Rotate entry of PDF pages
        #[arg(long)]
        no_rotation: bool,
    },
}

/// Output format for both subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated text with a header row
    Text,
    /// JSON array
    Json,
    /// Comma-separated values with a header row
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dims_defaults() {
        let cli = Cli::parse_from(["overlayer", "dims", "scan.pdf"]);
        assert!(!cli.verbose);
        match cli.command {
            Commands::Dims {
                file,
                format,
                crop_box,
                no_rotation,
            } => {
                assert_eq!(file, PathBuf::from("scan.pdf"));
                assert_eq!(format, OutputFormat::Text);
                assert!(!crop_box);
                assert!(!no_rotation);
            }
            other => panic!("expected Dims, got {other:?}"),
        }
    }

    #[test]
    fn parse_boxes_with_all_flags() {
        let cli = Cli::parse_from([
            "overlayer",
            "boxes",
            "scan.pdf",
            "--document",
            "analysis.json",
            "--features",
            "line,form",
            "--pages",
            "1-2",
            "--format",
            "csv",
            "--crop-box",
            "--no-rotation",
            "-v",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Boxes {
                document,
                features,
                pages,
                format,
                crop_box,
                no_rotation,
                ..
            } => {
                assert_eq!(document, PathBuf::from("analysis.json"));
                assert_eq!(features, "line,form");
                assert_eq!(pages.as_deref(), Some("1-2"));
                assert_eq!(format, OutputFormat::Csv);
                assert!(crop_box);
                assert!(no_rotation);
            }
            other => panic!("expected Boxes, got {other:?}"),
        }
    }

    #[test]
    fn boxes_requires_document() {
        assert!(Cli::try_parse_from(["overlayer", "boxes", "scan.pdf"]).is_err());
    }

    #[test]
    fn boxes_features_default_to_lines() {
        let cli = Cli::parse_from(["overlayer", "boxes", "a.png", "--document", "a.json"]);
        match cli.command {
            Commands::Boxes { features, .. } => assert_eq!(features, "line"),
            other => panic!("expected Boxes, got {other:?}"),
        }
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["overlayer", "dims", "a.pdf", "--format", "xml"]).is_err());
    }
}
