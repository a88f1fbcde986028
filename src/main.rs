//! jpeg-exif - print the EXIF tags of a JPEG file.

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jpeg_exif::{
    config::{Config, OutputFormat},
    hex_dump, tag_name, ExifReader, ExifSource, TagValue,
};

fn main() -> ExitCode {
    let config = Config::parse();
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), String> {
    let source = if config.reads_stdin() {
        // stdin is not seekable; buffer it
        let mut data = Vec::new();
        std::io::stdin()
            .read_to_end(&mut data)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        debug!(bytes = data.len(), "Buffered stdin");
        ExifSource::from(data)
    } else {
        ExifSource::from(config.input.as_str())
    };

    let tags = ExifReader::new()
        .with_filter(config.tag_filter()?)
        .follow_sub_ifds(config.sub_ifds)
        .decode(source)
        .map_err(|e| format!("{}: {}", config.input, e))?;

    let mut records = Vec::new();
    for tag in tags {
        let (id, value) = tag.map_err(|e| format!("{}: {}", config.input, e))?;
        match config.format {
            OutputFormat::Text => print_text(id, &value, config.hex_dump),
            OutputFormat::Json => records.push(TagRecord::new(id, &value)),
        }
    }

    if config.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| format!("Failed to serialize tags: {}", e))?;
        println!("{}", json);
    }

    Ok(())
}

fn print_text(id: u16, value: &TagValue, with_dump: bool) {
    println!(
        "0x{:04X}  {:<18} {}",
        id,
        tag_name(id).unwrap_or("-"),
        value
    );
    if let (true, TagValue::Bytes(bytes)) = (with_dump, value) {
        for line in hex_dump(bytes).lines() {
            println!("        {}", line);
        }
    }
}

/// One tag as written by `--format json`.
#[derive(Debug, Serialize)]
struct TagRecord {
    id: String,
    name: Option<&'static str>,
    #[serde(flatten)]
    value: RecordValue,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
enum RecordValue {
    Integer(u32),
    /// Hex-encoded
    Bytes(String),
    Text(String),
}

impl TagRecord {
    fn new(id: u16, value: &TagValue) -> Self {
        let value = match value {
            TagValue::Integer(v) => RecordValue::Integer(*v),
            TagValue::Bytes(b) => RecordValue::Bytes(hex::encode(b)),
            TagValue::Text(t) => RecordValue::Text(t.clone()),
        };
        TagRecord {
            id: format!("0x{:04X}", id),
            name: tag_name(id),
            value,
        }
    }
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "jpeg_exif=debug"
    } else {
        "jpeg_exif=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
