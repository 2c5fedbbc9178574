use super::{find_protocol, TemplateData, MAIN_TEMPLATE};
use crate::core::DetectionOutcome;
use crate::errors::Result;
use crate::io;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory, relative to the working dir, that receives the generated files.
pub const TARGET_PACKAGE: &str = "./ce-cmd/function";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedFile {
    pub file_name: String,
    pub contents: String,
}

/// How the downstream Go build must be driven to compile the generated command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDirective {
    #[serde(rename = "BP_GO_TARGETS.override")]
    pub targets: String,
    #[serde(rename = "GOFLAGS.append")]
    pub go_flags: String,
}

impl BuildDirective {
    pub fn for_protocol(protocol: &str) -> Self {
        Self {
            targets: TARGET_PACKAGE.to_string(),
            go_flags: format!(" -tags={protocol}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedOutput {
    pub files: Vec<PathBuf>,
    pub directive: BuildDirective,
}

/// Render the entrypoint and protocol adapter for an outcome.
///
/// Fails with `UnsupportedProtocol` before rendering anything when the
/// protocol has no adapter.
pub fn render(outcome: &DetectionOutcome) -> Result<Vec<RenderedFile>> {
    let protocol = find_protocol(&outcome.protocol)?;
    let data = TemplateData {
        package: &outcome.package_path,
        function: &outcome.function_name,
    };

    [&MAIN_TEMPLATE, &protocol.template]
        .into_iter()
        .map(|template| {
            Ok(RenderedFile {
                file_name: template.file_name(),
                contents: template.render(&data)?,
            })
        })
        .collect()
}

/// Render and write both files under `<working_dir>/ce-cmd/function`.
pub fn assemble(outcome: &DetectionOutcome, working_dir: &Path) -> Result<GeneratedOutput> {
    // Everything is rendered before the target directory is touched
    let rendered = render(outcome)?;

    let target = working_dir.join(TARGET_PACKAGE);
    io::ensure_dir(&target)?;

    let mut files = Vec::with_capacity(rendered.len());
    for file in rendered {
        let path = target.join(&file.file_name);
        io::write_file(&path, &file.contents)?;
        log::debug!("Wrote {}", path.display());
        files.push(path);
    }

    Ok(GeneratedOutput {
        files,
        directive: BuildDirective::for_protocol(&outcome.protocol),
    })
}
