//! Command-line interface definitions.
//!
//! Defines the CLI arguments using clap.

use clap::Parser;
use std::path::PathBuf;

/// Thimble wiki-to-html generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Directory containing the `.txt` pages
    pub input: PathBuf,

    /// Output directory (default: dist/)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Config file name (default: thimble.toml)
    #[arg(short = 'C', long, default_value = "thimble.toml")]
    pub config: PathBuf,

    /// Remove the output directory before writing pages
    #[arg(long)]
    pub clean: bool,

    /// Minify the html content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_input_only() {
        let cli = Cli::try_parse_from(["thimble", "notes"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("notes"));
        assert_eq!(cli.out, None);
        assert_eq!(cli.config, PathBuf::from("thimble.toml"));
        assert!(!cli.clean);
        assert_eq!(cli.minify, None);
    }

    #[test]
    fn test_parse_out_flag() {
        let cli = Cli::try_parse_from(["thimble", "notes", "-o", "site"]).unwrap();
        assert_eq!(cli.out, Some(PathBuf::from("site")));

        let cli = Cli::try_parse_from(["thimble", "--out=site", "notes"]).unwrap();
        assert_eq!(cli.out, Some(PathBuf::from("site")));
    }

    #[test]
    fn test_parse_minify_flag() {
        let cli = Cli::try_parse_from(["thimble", "notes", "--minify"]).unwrap();
        assert_eq!(cli.minify, Some(true));

        let cli = Cli::try_parse_from(["thimble", "notes", "--minify", "false"]).unwrap();
        assert_eq!(cli.minify, Some(false));
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        let err = Cli::try_parse_from(["thimble", "-o", "site"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_positional_is_usage_error() {
        let err = Cli::try_parse_from(["thimble", "a", "b"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_flag() {
        let err = Cli::try_parse_from(["thimble", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }
}
