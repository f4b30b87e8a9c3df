//! Validation for card decks.
//!
//! Only artwork is checked ahead of a build: a missing file is a warning
//! (the card renders flat) and a file that won't decode is an error. Used
//! by `cardpress validate`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::types::CardRecord;

/// Check every record's artwork, in deck order.
pub fn validate_deck(records: &[CardRecord]) -> ValidationResult {
    checks::check_artwork(records)
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let location = d.line.map(|l| format!(" line {}:", l)).unwrap_or_default();
        eprintln!(
            "  {}[{}]:{} {}",
            printer.severity(&d.severity.to_string(), d.severity == Severity::Error),
            d.code,
            location,
            d.message
        );
        if let Some(help) = &d.help {
            eprintln!("    {}", printer.dim(&format!("help: {}", help)));
        }
    }
}
