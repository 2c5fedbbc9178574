//! Detector orchestration.
//!
//! Walks the candidate files of a package in sorted order and accepts the
//! first function that both matches a supported signature and carries the
//! configured name. There is no scoring: the linear scan stops at the first
//! acceptable declaration.

use crate::analyzers::go::{scan_file, GoParser};
use crate::codegen::find_protocol;
use crate::config::DetectorConfig;
use crate::core::{DetectedFunction, DetectionOutcome, SourceUnit};
use crate::errors::{Error, Result};
use crate::io::{find_source_files, join_package_path, read_module_name, read_source};
use std::path::{Component, Path, PathBuf};

pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Run detection for the package configured relative to `working_dir`.
    ///
    /// The protocol and module root are checked before any source is read.
    pub fn detect(&self, working_dir: &Path) -> Result<DetectionOutcome> {
        find_protocol(&self.config.protocol)?;

        let module = read_module_name(working_dir)?;
        let package_path = join_package_path(&module, &self.config.package);
        let package_dir = package_dir(working_dir, &self.config.package);
        log::info!(
            "Looking for {} in {}",
            self.config.function.as_deref().unwrap_or("any supported function"),
            package_dir.display()
        );

        let files = find_source_files(&package_dir)?;
        let units = files.iter().map(|path| read_source(path));

        let detected = select_function(units, self.config.function.as_deref(), &package_path)?
            .ok_or_else(|| Error::NoMatchingFunction {
                function: self.config.function.clone(),
                package: package_path.clone(),
            })?;

        Ok(DetectionOutcome {
            package_path,
            function_name: detected.name,
            protocol: self.config.protocol.clone(),
        })
    }
}

/// Directory of the package, without `.` segments so logged paths stay clean.
fn package_dir(working_dir: &Path, package: &str) -> PathBuf {
    Path::new(package)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .fold(working_dir.to_path_buf(), |dir, c| dir.join(c))
}

/// Select the receiver from already-read units.
///
/// Units are consumed lazily so an unreadable file after the accepted one is
/// never touched. A file that fails to parse is logged and skipped; any
/// other error aborts.
pub fn select_function<I>(
    units: I,
    target: Option<&str>,
    package_path: &str,
) -> Result<Option<DetectedFunction>>
where
    I: IntoIterator<Item = Result<SourceUnit>>,
{
    let mut parser = GoParser::new()?;

    for unit in units {
        let parsed = unit.and_then(|unit| {
            log::debug!("Processing file {}", unit.path.display());
            let file = parser.parse(&unit)?;
            Ok((unit, file))
        });
        let (unit, file) = match parsed {
            Ok(parsed) => parsed,
            Err(e) if e.is_recoverable() => {
                log::warn!("Skipping {}", e);
                continue;
            }
            Err(e) => return Err(e),
        };

        for scanned in scan_file(&file) {
            let wanted = target.is_none_or(|name| name == scanned.name);

            match scanned.detected() {
                Some(detected) if wanted => {
                    log::info!(
                        "Using function {:?} in package {:?} signature {:?}",
                        detected.name,
                        package_path,
                        detected.signature_key
                    );
                    return Ok(Some(detected));
                }
                Some(detected) => log::info!(
                    "Found supported function {:?} in package {:?} signature {:?}",
                    detected.name,
                    package_path,
                    detected.signature_key
                ),
                None if target == Some(scanned.name.as_str()) => log::warn!(
                    "Function {:?} at {}:{} has unsupported signature {} (inputs {:?}, outputs {:?})",
                    scanned.name,
                    unit.path.display(),
                    scanned.line,
                    scanned.attempted_signature(),
                    scanned.inputs,
                    scanned.outputs
                ),
                None => {}
            }
        }
    }

    Ok(None)
}

/// [`select_function`] over in-memory sources.
pub fn detect_in_sources(
    units: &[SourceUnit],
    target: Option<&str>,
) -> Result<Option<DetectedFunction>> {
    select_function(units.iter().cloned().map(Ok), target, "")
}
