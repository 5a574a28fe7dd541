//! CLI commands and argument parsing

use crate::scale::Scale;
use crate::strings::StringCase;
use crate::system::CheckType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Connect Commons CLI
#[derive(Parser, Debug)]
#[command(name = "connect-commons")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set a system property (key=value), may be repeated
    #[arg(short = 'D', long = "define", global = true, value_name = "KEY=VALUE")]
    pub defines: Vec<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format a byte count or a millisecond duration
    Scale {
        /// Number of bytes, or milliseconds with --time
        value: i64,

        /// Treat the value as milliseconds
        #[arg(long)]
        time: bool,

        /// Scale family to choose from
        #[arg(long, default_value = "iec")]
        family: ScaleFamily,

        /// Format at this scale instead of the best fitting one
        #[arg(long, conflicts_with = "time")]
        at: Option<Scale>,
    },

    /// Convert text between string cases
    Case {
        /// Text to convert
        text: String,

        /// Case the text is written in
        #[arg(long)]
        from: StringCase,

        /// Target case (all cases when omitted)
        #[arg(long)]
        to: Option<StringCase>,
    },

    /// Validate a Google Cloud credentials file
    GcpValidate {
        /// Credentials JSON file
        file: PathBuf,
    },

    /// Check a value against an allow list
    Allowed {
        /// Kind of value (file, uri, cmd)
        check: CheckType,

        /// Value to check
        value: String,

        /// Read the allow list from environment variables instead of system properties
        #[arg(long)]
        env: bool,
    },

    /// Parse a since override map and show its effect on the common options
    SinceMap {
        /// Override map file
        file: PathBuf,
    },

    /// Describe and validate the common connector options
    Report {
        /// Option value (key=value), may be repeated
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Since override map applied before reporting
        #[arg(long)]
        since_map: Option<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Indented JSON output
    Pretty,
}

/// Groups of byte scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScaleFamily {
    /// Binary prefixes (KiB, MiB, ...)
    Iec,
    /// Decimal prefixes (KB, MB, ...)
    Si,
    /// Both families
    All,
}

impl ScaleFamily {
    /// The scales in this family
    pub fn scales(self) -> &'static [Scale] {
        match self {
            ScaleFamily::Iec => &Scale::IEC,
            ScaleFamily::Si => &Scale::SI,
            ScaleFamily::All => &Scale::ALL,
        }
    }
}
