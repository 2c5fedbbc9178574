//! Helpers for building throwaway Go modules on disk.

#![allow(dead_code)]

use ce_go_function::Category;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const STANDARD_IMPORTS: &str = r#"import (
	"context"

	event "github.com/cloudevents/sdk-go/v2"
	"github.com/cloudevents/sdk-go/v2/protocol"
)
"#;

/// A temporary module with `go.mod` declaring `module`.
pub fn go_module(module: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("go.mod"),
        format!("module {module}\n\ngo 1.21\n"),
    )
    .unwrap();
    dir
}

pub fn write_go_file(dir: &Path, name: &str, contents: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), contents).unwrap();
}

/// Go spelling of a category under [`STANDARD_IMPORTS`].
pub fn go_type(category: Category) -> &'static str {
    match category {
        Category::Context => "context.Context",
        Category::Envelope => "event.Event",
        Category::EnvelopePointer => "*event.Event",
        Category::ProtocolResult => "protocol.Result",
        Category::Error => "error",
        Category::Unsupported => "string",
    }
}

/// Source declaring `name` with the given parameter and result categories.
pub fn receiver_source(name: &str, inputs: &[Category], outputs: &[Category]) -> String {
    let params = inputs
        .iter()
        .map(|c| go_type(*c))
        .collect::<Vec<_>>()
        .join(", ");
    let results = outputs
        .iter()
        .map(|c| go_type(*c))
        .collect::<Vec<_>>()
        .join(", ");
    let results = match outputs.len() {
        0 => String::new(),
        1 => format!(" {results}"),
        _ => format!(" ({results})"),
    };

    format!(
        "package fn\n\n{STANDARD_IMPORTS}\nfunc {name}({params}){results} {{\n\tpanic(\"unimplemented\")\n}}\n"
    )
}
