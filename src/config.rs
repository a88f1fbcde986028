//! Command-line configuration for the `jpeg-exif` binary.
//!
//! Options can be given as arguments or through environment variables with
//! the `EXIF_` prefix:
//!
//! - `EXIF_TAGS` - comma-separated tag ids to print (default: all)
//! - `EXIF_FORMAT` - `text` or `json` (default: text)
//! - `EXIF_SUB_IFDS` - also walk the Exif and GPS sub-directories

use clap::{Parser, ValueEnum};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Output format for decoded tags.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One aligned line per tag
    #[default]
    Text,
    /// A JSON array of tag records
    Json,
}

/// jpeg-exif - print the EXIF tags of a JPEG file.
#[derive(Parser, Debug, Clone)]
#[command(name = "jpeg-exif")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// JPEG file to read, or `-` to read from stdin.
    pub input: String,

    /// Tag ids to print, decimal or 0x-prefixed hex. Repeatable.
    #[arg(short, long = "tag", env = "EXIF_TAGS", value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "EXIF_FORMAT")]
    pub format: OutputFormat,

    /// Also walk the Exif and GPS sub-directories.
    #[arg(long, default_value_t = false, env = "EXIF_SUB_IFDS")]
    pub sub_ifds: bool,

    /// Print a hex dump under every raw byte value (text output only).
    #[arg(long, default_value_t = false)]
    pub hex_dump: bool,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.input.is_empty() {
            return Err("An input file is required. Pass a path or `-` for stdin".to_string());
        }
        self.tag_filter()?;
        Ok(())
    }

    /// Whether the input should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input == "-"
    }

    /// Parsed tag ids. Empty means every tag.
    pub fn tag_filter(&self) -> Result<Vec<u16>, String> {
        self.tags.iter().map(|tag| parse_tag_id(tag)).collect()
    }
}

/// Parse a tag id written as decimal (`271`) or hex (`0x010F`).
pub fn parse_tag_id(value: &str) -> Result<u16, String> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => trimmed.parse::<u16>(),
    };
    parsed.map_err(|_| format!("Invalid tag id '{}': expected a 16-bit decimal or 0x-hex value", value))
}

// =============================================================================
// Tests
// =============================================================================
