use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info};

use crate::config::GreetingConfig;
use crate::error::{Error, Result};

const BUILTIN_NAME: &str = "builtin";
const BUILTIN: &str = include_str!("../assets/birthdaystore.toml");
const SERIALIZED_NAME: &str = "serialized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| Error::malformed(&name, "missing file extension"))?;
        ext.parse().map_err(|_| {
            Error::malformed(&name, format!("unsupported extension `{}`", ext))
        })
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            _ => Err(Error::malformed(s, "unknown format")),
        }
    }
}

/// Parses and validates a greeting asset. `source_name` only shows up in
/// error messages.
pub fn from_str(text: &str, format: Format, source_name: &str) -> Result<GreetingConfig> {
    let config: GreetingConfig = match format {
        Format::Toml => toml::from_str(text).map_err(|e| Error::malformed(source_name, e))?,
        Format::Json => {
            serde_json::from_str(text).map_err(|e| Error::malformed(source_name, e))?
        }
    };
    config.validate(source_name)?;
    debug!(
        "parsed {}: {} lines, {} images",
        source_name,
        config.texts.len(),
        config.imgs.len()
    );
    Ok(config)
}

pub fn to_string(config: &GreetingConfig, format: Format) -> Result<String> {
    match format {
        Format::Toml => toml::to_string(config).map_err(|e| Error::malformed(SERIALIZED_NAME, e)),
        Format::Json => serde_json::to_string_pretty(config)
            .map_err(|e| Error::malformed(SERIALIZED_NAME, e)),
    }
}

pub fn load(path: &Path) -> Result<GreetingConfig> {
    let format = Format::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = from_str(&contents, format, &path.display().to_string())?;
    info!("loaded greeting from {}", path.display());
    Ok(config)
}

/// The greeting compiled into the crate.
pub fn builtin() -> Result<GreetingConfig> {
    from_str(BUILTIN, Format::Toml, BUILTIN_NAME)
}
