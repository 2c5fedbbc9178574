//! Host module discovery from `go.mod`.

use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

pub const GO_MOD: &str = "go.mod";

/// Read the module path declared in `<working_dir>/go.mod`.
pub fn read_module_name(working_dir: &Path) -> Result<String> {
    let path = working_dir.join(GO_MOD);
    let contents = fs::read_to_string(&path)
        .map_err(|e| Error::missing_module_root(&path, e.to_string()))?;

    match parse_module_directive(&contents) {
        Some(module) => {
            log::debug!("Module root {} from {}", module, path.display());
            Ok(module)
        }
        None => Err(Error::missing_module_root(&path, "no module directive")),
    }
}

/// Extract the path from the first `module` directive.
pub fn parse_module_directive(contents: &str) -> Option<String> {
    contents.lines().find_map(|line| {
        let line = line.split("//").next().unwrap_or_default().trim();
        let rest = line.strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let module = rest.trim().trim_matches(|c| c == '"' || c == '`');
        (!module.is_empty()).then(|| module.to_string())
    })
}

/// Join a module path with a package directory relative to the module root.
///
/// `.` and empty segments are dropped and `..` removes the previous segment,
/// so `("example.org/fn", "./pkg/../handler/")` becomes
/// `example.org/fn/handler`.
pub fn join_package_path(module: &str, package_dir: &str) -> String {
    let mut segments: Vec<&str> = module.split('/').filter(|s| !s.is_empty()).collect();
    for segment in package_dir.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}
