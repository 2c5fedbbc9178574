//! Import alias resolution.
//!
//! Tracks which local qualifier each of the three packages of interest is
//! bound to in one source file, accounting for renamed, dot and blank
//! imports.

use crate::core::ast::{ImportAlias, ImportSpec};

/// A package whose types the classifier recognises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnownImport {
    pub path: &'static str,
    /// Local name when the import carries no alias
    pub default_name: &'static str,
}

pub const ENVELOPE_IMPORT: KnownImport = KnownImport {
    path: "github.com/cloudevents/sdk-go/v2",
    default_name: "v2",
};

pub const RESULT_IMPORT: KnownImport = KnownImport {
    path: "github.com/cloudevents/sdk-go/v2/protocol",
    default_name: "protocol",
};

pub const CONTEXT_IMPORT: KnownImport = KnownImport {
    path: "context",
    default_name: "context",
};

/// Local qualifiers for the envelope, result and context packages.
///
/// `None` means the package is not imported. `Some("")` means it was
/// dot-imported, so its types appear unqualified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AliasTable {
    pub envelope: Option<String>,
    pub result: Option<String>,
    pub context: Option<String>,
}

impl AliasTable {
    pub fn from_imports(imports: &[ImportSpec]) -> Self {
        let mut table = Self::default();

        for import in imports {
            let (field, known) = if import.path == ENVELOPE_IMPORT.path {
                (&mut table.envelope, ENVELOPE_IMPORT)
            } else if import.path == RESULT_IMPORT.path {
                (&mut table.result, RESULT_IMPORT)
            } else if import.path == CONTEXT_IMPORT.path {
                (&mut table.context, CONTEXT_IMPORT)
            } else {
                continue;
            };

            if let Some(local) = local_name(import, known) {
                *field = Some(local);
            }
        }

        table
    }
}

fn local_name(import: &ImportSpec, known: KnownImport) -> Option<String> {
    match &import.alias {
        None => Some(known.default_name.to_string()),
        Some(ImportAlias::Named(name)) => Some(name.clone()),
        Some(ImportAlias::Dot) => Some(String::new()),
        Some(ImportAlias::Blank) => None,
    }
}
