//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::deck::load_deck;
use crate::error::{CardError, Result};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_deck, ValidationResult};

/// Check that a CSV deck loads and its artwork can be read
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// CSV file to check
    pub deck: PathBuf,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let result = check(&args, printer)?;
    print_diagnostics(&result, printer);

    let errors = result.error_count();
    let warnings = result.warning_count();
    if errors > 0 {
        return Err(CardError::Build {
            message: format!(
                "Validation failed: {}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
            help: None,
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{} checked ({})",
            display_path(&args.deck),
            plural(warnings, "warning", "warnings")
        ),
    );
    Ok(())
}

/// Load the deck and check its artwork.
pub fn check(args: &ValidateArgs, printer: &Printer) -> Result<ValidationResult> {
    let records = load_deck(&args.deck)?;
    printer.status(
        "Checking",
        &format!(
            "{} in {}",
            plural(records.len(), "card", "cards"),
            display_path(&args.deck)
        ),
    );

    Ok(validate_deck(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(deck: PathBuf) -> ValidateArgs {
        ValidateArgs { deck }
    }

    #[test]
    fn test_validate_warnings_only_passes() {
        let dir = tempdir().unwrap();
        let deck = dir.path().join("deck.csv");
        fs::write(
            &deck,
            "title,cost,type,ability,atk,image_path\nGoblin,X,Creature,Haste,2,missing.png\n",
        )
        .unwrap();

        // Missing artwork only; the non-numeric cost is not judged
        let result = check(&args(deck.clone()), &Printer::plain()).unwrap();
        assert_eq!(result.warning_count(), 1);
        assert!(run(args(deck), &Printer::plain()).is_ok());
    }

    #[test]
    fn test_validate_unreadable_artwork_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.png"), b"nope").unwrap();
        let deck = dir.path().join("deck.csv");
        fs::write(
            &deck,
            "title,cost,type,ability,atk,image_path\nGoblin,1,Creature,Haste,2,bad.png\n",
        )
        .unwrap();

        assert!(run(args(deck), &Printer::plain()).is_err());
    }

    #[test]
    fn test_validate_missing_column_is_error() {
        let dir = tempdir().unwrap();
        let deck = dir.path().join("deck.csv");
        fs::write(&deck, "title,cost\nGoblin,1\n").unwrap();

        let err = check(&args(deck), &Printer::plain()).unwrap_err();
        assert!(matches!(err, CardError::MissingField { .. }));
    }
}
