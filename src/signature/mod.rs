//! Registry of supported receiver signatures.
//!
//! The set mirrors what the CloudEvents Go client knows how to invoke. It is
//! closed and versioned with this tool; lookups go by structure, never by key.

use crate::core::Category::{self, Context, Envelope, EnvelopePointer, Error, ProtocolResult};
use once_cell::sync::Lazy;
use std::fmt::Write;

#[derive(Debug, PartialEq, Eq)]
pub struct CanonicalSignature {
    pub key: &'static str,
    pub inputs: &'static [Category],
    pub outputs: &'static [Category],
}

const fn sig(
    key: &'static str,
    inputs: &'static [Category],
    outputs: &'static [Category],
) -> CanonicalSignature {
    CanonicalSignature {
        key,
        inputs,
        outputs,
    }
}

static SIGNATURES: [CanonicalSignature; 12] = [
    sig("func(event.Event)", &[Envelope], &[]),
    sig("func(event.Event) protocol.Result", &[Envelope], &[ProtocolResult]),
    sig("func(event.Event) error", &[Envelope], &[Error]),
    sig("func(context.Context, event.Event)", &[Context, Envelope], &[]),
    sig(
        "func(context.Context, event.Event) protocol.Result",
        &[Context, Envelope],
        &[ProtocolResult],
    ),
    sig(
        "func(context.Context, event.Event) error",
        &[Context, Envelope],
        &[Error],
    ),
    sig("func(event.Event) *event.Event", &[Envelope], &[EnvelopePointer]),
    sig(
        "func(event.Event) (*event.Event, protocol.Result)",
        &[Envelope],
        &[EnvelopePointer, ProtocolResult],
    ),
    sig(
        "func(event.Event) (*event.Event, error)",
        &[Envelope],
        &[EnvelopePointer, Error],
    ),
    sig(
        "func(context.Context, event.Event) *event.Event",
        &[Context, Envelope],
        &[EnvelopePointer],
    ),
    sig(
        "func(context.Context, event.Event) (*event.Event, protocol.Result)",
        &[Context, Envelope],
        &[EnvelopePointer, ProtocolResult],
    ),
    sig(
        "func(context.Context, event.Event) (*event.Event, error)",
        &[Context, Envelope],
        &[EnvelopePointer, Error],
    ),
];

/// All supported signatures in listing order.
pub fn iter() -> impl Iterator<Item = &'static CanonicalSignature> {
    SIGNATURES.iter()
}

/// Find the signature whose input and output lists equal the candidate's
/// position by position.
pub fn lookup(inputs: &[Category], outputs: &[Category]) -> Option<&'static CanonicalSignature> {
    if inputs
        .iter()
        .chain(outputs)
        .any(|c| *c == Category::Unsupported)
    {
        return None;
    }

    SIGNATURES
        .iter()
        .find(|s| s.inputs == inputs && s.outputs == outputs)
}

/// Render category lists the way registry keys are spelled.
pub fn render_key(inputs: &[Category], outputs: &[Category]) -> String {
    let params = inputs
        .iter()
        .map(|c| c.display_name())
        .collect::<Vec<_>>()
        .join(", ");
    let results = outputs
        .iter()
        .map(|c| c.display_name())
        .collect::<Vec<_>>()
        .join(", ");

    match outputs.len() {
        0 => format!("func({params})"),
        1 => format!("func({params}) {results}"),
        _ => format!("func({params}) ({results})"),
    }
}

static SUPPORTED_HELP: Lazy<String> = Lazy::new(|| {
    let mut help = String::from(
        "Could not find a supported function signature. The function must be exported \
         from its package (Receive, not receive) and may use these imports:\n\n\
         import (\n    \"context\"\n    event \"github.com/cloudevents/sdk-go/v2\"\n    \
         \"github.com/cloudevents/sdk-go/v2/protocol\"\n)\n\n\
         The following function signatures are supported:\n",
    );
    for signature in SIGNATURES.iter() {
        let _ = writeln!(help, "{}", signature.key);
    }
    help
});

/// User-facing listing of every supported signature.
pub fn supported_signatures_help() -> &'static str {
    &SUPPORTED_HELP
}
