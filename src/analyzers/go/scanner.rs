use super::classify::classify_type;
use super::imports::AliasTable;
use crate::core::ast::{FuncDecl, GoFile, TypeExpr};
use crate::core::{Category, DetectedFunction};
use crate::signature::{self, CanonicalSignature};

/// Classification of one top-level function declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannedFunction {
    pub name: String,
    pub line: usize,
    pub inputs: Vec<Category>,
    pub outputs: Vec<Category>,
    pub signature: Option<&'static CanonicalSignature>,
}

impl ScannedFunction {
    pub fn detected(&self) -> Option<DetectedFunction> {
        self.signature.map(|s| DetectedFunction {
            name: self.name.clone(),
            signature_key: s.key,
        })
    }

    /// The attempted shape, spelled like a registry key.
    pub fn attempted_signature(&self) -> String {
        signature::render_key(&self.inputs, &self.outputs)
    }
}

/// Classify every free function in source order. Methods are skipped.
pub fn scan_file(file: &GoFile) -> Vec<ScannedFunction> {
    let aliases = AliasTable::from_imports(&file.imports);
    file.functions
        .iter()
        .filter(|f| !f.has_receiver)
        .map(|f| scan_function(f, &aliases))
        .collect()
}

fn scan_function(function: &FuncDecl, aliases: &AliasTable) -> ScannedFunction {
    let inputs = classify_all(&function.params, aliases);
    let outputs = classify_all(&function.results, aliases);
    let signature = signature::lookup(&inputs, &outputs);

    ScannedFunction {
        name: function.name.clone(),
        line: function.line,
        inputs,
        outputs,
        signature,
    }
}

fn classify_all(types: &[TypeExpr], aliases: &AliasTable) -> Vec<Category> {
    types.iter().map(|t| classify_type(t, aliases)).collect()
}
