use super::imports::AliasTable;
use crate::core::ast::TypeExpr;
use crate::core::Category;

pub const ENVELOPE_TYPE: &str = "Event";
pub const CONTEXT_TYPE: &str = "Context";
pub const RESULT_TYPE: &str = "Result";
pub const ERROR_TYPE: &str = "error";

/// Map one parameter or result type to its semantic category.
///
/// Never fails: anything unrecognised is [`Category::Unsupported`].
pub fn classify_type(expr: &TypeExpr, aliases: &AliasTable) -> Category {
    match expr {
        TypeExpr::Pointer(inner) => match inner.as_named() {
            Some((qualifier, ENVELOPE_TYPE)) if is_bound(&aliases.envelope, qualifier) => {
                Category::EnvelopePointer
            }
            _ => Category::Unsupported,
        },
        TypeExpr::Ident(name) => classify_named("", name, aliases),
        TypeExpr::Qualified { package, name } => classify_named(package, name, aliases),
        TypeExpr::Other(_) => Category::Unsupported,
    }
}

fn classify_named(qualifier: &str, name: &str, aliases: &AliasTable) -> Category {
    match name {
        ENVELOPE_TYPE if is_bound(&aliases.envelope, qualifier) => Category::Envelope,
        CONTEXT_TYPE if is_context_qualifier(&aliases.context, qualifier) => Category::Context,
        RESULT_TYPE if is_bound(&aliases.result, qualifier) => Category::ProtocolResult,
        ERROR_TYPE if qualifier.is_empty() => Category::Error,
        _ => Category::Unsupported,
    }
}

fn is_bound(alias: &Option<String>, qualifier: &str) -> bool {
    alias.as_deref() == Some(qualifier)
}

// An unqualified Context is accepted when the context package is not imported
fn is_context_qualifier(alias: &Option<String>, qualifier: &str) -> bool {
    match alias {
        None => qualifier.is_empty(),
        Some(bound) => bound == qualifier,
    }
}
