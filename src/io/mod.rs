pub mod module;
pub mod walker;

pub use module::{join_package_path, read_module_name};
pub use walker::{find_source_files, SourceWalker};

use crate::core::SourceUnit;
use crate::errors::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Read a candidate file.
///
/// I/O failures are fatal for the whole run. Contents that are not UTF-8
/// are a syntax problem of that one file and come back as
/// [`Error::MalformedSource`].
pub fn read_source(path: &Path) -> Result<SourceUnit> {
    let bytes = fs::read(path).map_err(|source| Error::UnreadableSource {
        path: path.to_path_buf(),
        source,
    })?;
    let source = String::from_utf8(bytes)
        .map_err(|e| Error::malformed(path, format!("invalid UTF-8: {}", e.utf8_error())))?;
    Ok(SourceUnit::new(path, source))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn append_file(path: &Path, content: &str) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
