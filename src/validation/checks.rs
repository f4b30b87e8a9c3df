//! Artwork checks for a loaded deck.

use crate::render::load_artwork;
use crate::types::CardRecord;

use super::warning::{Diagnostic, ValidationResult};

/// Check that every artwork file exists and decodes.
pub fn check_artwork(records: &[CardRecord]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for record in records {
        match load_artwork(&record.image_path) {
            Ok(Some(_)) => {}
            Ok(None) => result.push(
                Diagnostic::warning(
                    "cardpress::validate::missing-artwork",
                    format!(
                        "Card '{}': artwork '{}' not found",
                        record.title,
                        record.image_path.display()
                    ),
                )
                .at_line(record.line)
                .with_help("The card will render with a flat background"),
            ),
            Err(e) => result.push(
                Diagnostic::error("cardpress::validate::unreadable-artwork", e.to_string())
                    .at_line(record.line)
                    .with_help("Convert the image to PNG or JPEG"),
            ),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(title: &str) -> CardRecord {
        CardRecord::new(title, 1, "Unit", "", 1, "missing.png")
    }

    fn codes(result: &ValidationResult) -> Vec<&str> {
        result.iter().map(|d| d.code.as_str()).collect()
    }

    #[test]
    fn test_missing_artwork_is_warning() {
        let result = check_artwork(&[record("A").at_line(2)]);
        assert_eq!(codes(&result), vec!["cardpress::validate::missing-artwork"]);
        assert!(!result.has_errors());
        assert_eq!(result.iter().next().unwrap().line, Some(2));
    }

    #[test]
    fn test_unreadable_artwork_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"garbage").unwrap();

        let mut card = record("A");
        card.image_path = path;
        let result = check_artwork(&[card]);
        assert!(result.has_errors());
        assert_eq!(codes(&result), vec!["cardpress::validate::unreadable-artwork"]);
    }

    #[test]
    fn test_good_artwork_passes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("good.png");
        image::RgbaImage::new(4, 4).save(&path).unwrap();

        let mut card = record("A");
        card.image_path = path;
        assert!(check_artwork(&[card]).is_ok());
    }
}
