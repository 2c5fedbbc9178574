pub mod classify;
pub mod imports;
pub mod scanner;

use crate::core::ast::{FuncDecl, GoFile, ImportAlias, ImportSpec, TypeExpr};
use crate::core::SourceUnit;
use crate::errors::{Error, Result};
use tree_sitter::{Node, Parser};

pub use classify::classify_type;
pub use imports::AliasTable;
pub use scanner::{scan_file, ScannedFunction};

/// Turns Go source text into a [`GoFile`] declaration tree.
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    /// Parse one unit. Any syntax error in the file is reported as
    /// [`Error::MalformedSource`].
    pub fn parse(&mut self, unit: &SourceUnit) -> Result<GoFile> {
        let tree = self
            .parser
            .parse(&unit.source, None)
            .ok_or_else(|| Error::malformed(&unit.path, "parser produced no tree"))?;
        let root = tree.root_node();

        if root.has_error() {
            let message = match first_error(root) {
                Some(node) => {
                    let pos = node.start_position();
                    format!("syntax error at {}:{}", pos.row + 1, pos.column + 1)
                }
                None => "syntax error".to_string(),
            };
            return Err(Error::malformed(&unit.path, message));
        }

        Ok(lower_file(root, unit.source.as_bytes()))
    }
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            if let Some(found) = first_error(child) {
                return Some(found);
            }
        }
    }
    None
}

fn text(node: Node, source: &[u8]) -> String {
    node.utf8_text(source).unwrap_or_default().to_string()
}

fn lower_file(root: Node, source: &[u8]) -> GoFile {
    let mut file = GoFile {
        package_name: String::new(),
        imports: Vec::new(),
        functions: Vec::new(),
    };

    let mut cursor = root.walk();
    for node in root.named_children(&mut cursor) {
        match node.kind() {
            "package_clause" => {
                if let Some(name) = node.named_child(0) {
                    file.package_name = text(name, source);
                }
            }
            "import_declaration" => collect_imports(node, source, &mut file.imports),
            "function_declaration" => file.functions.push(lower_function(node, source, false)),
            "method_declaration" => file.functions.push(lower_function(node, source, true)),
            _ => {}
        }
    }

    file
}

fn collect_imports(node: Node, source: &[u8], imports: &mut Vec<ImportSpec>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "import_spec" => {
                if let Some(spec) = lower_import_spec(child, source) {
                    imports.push(spec);
                }
            }
            "import_spec_list" => collect_imports(child, source, imports),
            _ => {}
        }
    }
}

fn lower_import_spec(node: Node, source: &[u8]) -> Option<ImportSpec> {
    let path = node.child_by_field_name("path")?;
    let path = text(path, source)
        .trim_matches(|c| c == '"' || c == '`')
        .to_string();

    let alias = node
        .child_by_field_name("name")
        .map(|name| match text(name, source).as_str() {
            "." => ImportAlias::Dot,
            "_" => ImportAlias::Blank,
            other => ImportAlias::Named(other.to_string()),
        });

    Some(ImportSpec { path, alias })
}

fn lower_function(node: Node, source: &[u8], has_receiver: bool) -> FuncDecl {
    let name = node
        .child_by_field_name("name")
        .map(|n| text(n, source))
        .unwrap_or_default();

    let params = node
        .child_by_field_name("parameters")
        .map(|list| lower_parameter_list(list, source))
        .unwrap_or_default();

    // A single unnamed result is a bare type; anything else is a list
    let results = match node.child_by_field_name("result") {
        Some(result) if result.kind() == "parameter_list" => lower_parameter_list(result, source),
        Some(result) => vec![lower_type(result, source)],
        None => Vec::new(),
    };

    FuncDecl {
        name,
        line: node.start_position().row + 1,
        has_receiver,
        params,
        results,
    }
}

fn lower_parameter_list(list: Node, source: &[u8]) -> Vec<TypeExpr> {
    let mut types = Vec::new();
    let mut cursor = list.walk();

    for decl in list.named_children(&mut cursor) {
        match decl.kind() {
            "parameter_declaration" => {
                let Some(ty) = decl.child_by_field_name("type") else {
                    continue;
                };
                let ty = lower_type(ty, source);
                let mut names = decl.walk();
                let count = decl
                    .children_by_field_name("name", &mut names)
                    .count()
                    .max(1);
                types.extend(std::iter::repeat(ty).take(count));
            }
            "variadic_parameter_declaration" => types.push(TypeExpr::Other(text(decl, source))),
            _ => {}
        }
    }

    types
}

fn lower_type(node: Node, source: &[u8]) -> TypeExpr {
    match node.kind() {
        "type_identifier" => TypeExpr::Ident(text(node, source)),
        "qualified_type" => match (
            node.child_by_field_name("package"),
            node.child_by_field_name("name"),
        ) {
            (Some(package), Some(name)) => {
                TypeExpr::qualified(text(package, source), text(name, source))
            }
            _ => TypeExpr::Other(text(node, source)),
        },
        "pointer_type" => match node.named_child(0) {
            Some(inner) => TypeExpr::pointer(lower_type(inner, source)),
            None => TypeExpr::Other(text(node, source)),
        },
        "parenthesized_type" => match node.named_child(0) {
            Some(inner) => lower_type(inner, source),
            None => TypeExpr::Other(text(node, source)),
        },
        _ => TypeExpr::Other(text(node, source)),
    }
}
