use std::path::PathBuf;

use thiserror::Error;

/// Which mapping a lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Imgs,
    Desc,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Imgs => f.write_str("imgs"),
            Section::Desc => f.write_str("desc"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("no entry `{key}` in `{section}`")]
    MissingKey { section: Section, key: String },

    #[error("malformed asset `{source_name}`: {reason}")]
    MalformedAsset { source_name: String, reason: String },

    #[error("could not read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn missing(section: Section, key: &str) -> Self {
        Error::MissingKey {
            section,
            key: key.to_string(),
        }
    }

    pub(crate) fn malformed(source_name: &str, reason: impl std::fmt::Display) -> Self {
        Error::MalformedAsset {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
