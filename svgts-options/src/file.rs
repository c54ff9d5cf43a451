use std::{path::Path, str::FromStr};

use crate::{Error, RawOptions, Result};

impl FromStr for RawOptions {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_options(s, ConfigFile::DEFAULT_NAME)
    }
}

/// Parse config file content, using `filename` for error reporting.
pub fn parse_options(content: &str, filename: &str) -> Result<RawOptions> {
    toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
}

/// A TOML config file holding option values.
///
/// Paths inside the file are used as written, relative to the working directory.
#[derive(Debug)]
pub struct ConfigFile {
    options: RawOptions,
}

impl ConfigFile {
    /// Conventional name of the config file.
    pub const DEFAULT_NAME: &'static str = "svg-to-ts.toml";

    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let options = parse_options(&content, &path.display().to_string())?;

        Ok(Self { options })
    }

    /// Take the parsed option values.
    pub fn into_options(self) -> RawOptions {
        self.options
    }
}
