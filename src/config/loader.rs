use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use super::core::FileConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE: &str = "ce-function.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<FileConfig, String> {
    toml::from_str::<FileConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE, e))
}

/// Load `ce-function.toml` from the working directory.
///
/// A missing file is not an error; an unreadable or invalid one is.
pub fn load_config(working_dir: &Path) -> Result<Option<FileConfig>> {
    let path = working_dir.join(CONFIG_FILE);

    let contents = match read_config_file(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No {} in {}", CONFIG_FILE, working_dir.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(Error::Configuration(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    let config = parse_config(&contents).map_err(Error::Configuration)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}
