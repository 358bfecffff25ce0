use tracing::{trace, warn};

use super::{declaration::DeclarationKind, Diagnostic, DiagnosticKind};

pub fn handle_unrecognized_line(line_number: usize, line: &str, diagnostics: &mut Vec<Diagnostic>) {
    warn!(line = line_number, content = line, "unrecognized line ignored");
    diagnostics.push(Diagnostic::new(
        line_number,
        line,
        DiagnosticKind::UnrecognizedLine,
    ));
}

// TODO keep groups, objects and material names around once the buffers have a
// place for per-face metadata.
pub fn handle_unsupported_line(line_number: usize, kind: DeclarationKind) {
    trace!(line = line_number, ?kind, "unsupported declaration ignored");
}
