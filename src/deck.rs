//! Deck loading - CSV rows into card records.
//!
//! The header row names the columns; order doesn't matter and extra
//! columns are ignored. Every row must carry all six card fields.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{CardError, Result};
use crate::types::CardRecord;

/// Required columns, in record order.
pub const COLUMNS: [&str; 6] = ["title", "cost", "type", "ability", "atk", "image_path"];

/// Load a deck from a CSV file.
///
/// Relative artwork paths resolve against the CSV file's directory.
pub fn load_deck(path: &Path) -> Result<Vec<CardRecord>> {
    let file = File::open(path).map_err(|e| CardError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to open deck: {}", e),
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    read_deck(file, base_dir, path)
}

/// Read a deck from any reader. `source` is only used in error messages.
pub fn read_deck<R: Read>(reader: R, base_dir: &Path, source: &Path) -> Result<Vec<CardRecord>> {
    let csv_error = |e: csv::Error| CardError::Csv {
        path: source.to_path_buf(),
        message: e.to_string(),
    };

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_error)?.clone();
    let mut indices = [0usize; COLUMNS.len()];
    for (slot, column) in indices.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(column))
            .ok_or(CardError::MissingField {
                line: 1,
                field: column,
            })?;
    }

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(csv_error)?;
        let line = row.position().map_or(0, |p| p.line());

        let mut fields = [""; COLUMNS.len()];
        for ((value, &index), column) in fields.iter_mut().zip(&indices).zip(COLUMNS) {
            *value = row
                .get(index)
                .ok_or(CardError::MissingField { line, field: column })?;
        }
        let [title, cost, kind, ability, atk, image] = fields;

        records.push(
            CardRecord::new(title, cost, kind, ability, atk, resolve_image(base_dir, image))
                .at_line(line),
        );
    }

    log::debug!("read {} records from {}", records.len(), source.display());
    Ok(records)
}

fn resolve_image(base_dir: &Path, image: &str) -> PathBuf {
    let path = PathBuf::from(image);
    if image.is_empty() || path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn read(csv: &str) -> Result<Vec<CardRecord>> {
        read_deck(csv.as_bytes(), Path::new("art"), Path::new("deck.csv"))
    }

    #[test]
    fn test_read_basic_deck() {
        let deck = read(
            "title,cost,type,ability,atk,image_path\n\
             Goblin,1,Creature,Haste,2,goblin.png\n\
             Bolt,1,Spell,\"Deal 3 damage, then scry 1\",0,/abs/bolt.png\n",
        )
        .unwrap();

        assert_eq!(deck.len(), 2);
        assert_eq!(
            deck[0],
            CardRecord::new("Goblin", "1", "Creature", "Haste", "2", "art/goblin.png").at_line(2)
        );
        assert_eq!(deck[1].ability, "Deal 3 damage, then scry 1");
        assert_eq!(deck[1].image_path, PathBuf::from("/abs/bolt.png"));
        assert_eq!(deck[1].line, 3);
    }

    #[test]
    fn test_columns_in_any_order_with_extras() {
        let deck = read(
            "notes, ATK ,image_path,title,cost,type,ability\n\
             ignore me, 7 , x.png , Wisp ,0,Spirit,\n",
        )
        .unwrap();

        assert_eq!(deck[0].title, "Wisp");
        assert_eq!(deck[0].atk, "7");
        assert_eq!(deck[0].ability, "");
        assert_eq!(deck[0].image_path, PathBuf::from("art/x.png"));
    }

    #[test]
    fn test_missing_header_column() {
        let err = read("title,cost,type,ability,image_path\nA,1,B,C,d.png\n").unwrap_err();
        assert!(matches!(
            err,
            CardError::MissingField {
                line: 1,
                field: "atk"
            }
        ));
    }

    #[test]
    fn test_short_row_names_line_and_field() {
        let err = read(
            "title,cost,type,ability,atk,image_path\n\
             A,1,B,C,2,a.png\n\
             B,1,B,C\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CardError::MissingField {
                line: 3,
                field: "atk"
            }
        ));
    }

    #[test]
    fn test_empty_image_path_stays_empty() {
        let deck = read("title,cost,type,ability,atk,image_path\nA,1,B,C,2,\n").unwrap();
        assert_eq!(deck[0].image_path, PathBuf::new());
    }

    #[test]
    fn test_header_only_is_empty_deck() {
        assert!(read("title,cost,type,ability,atk,image_path\n").unwrap().is_empty());
    }

    #[test]
    fn test_load_deck_resolves_against_csv_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deck.csv");
        std::fs::write(
            &path,
            "title,cost,type,ability,atk,image_path\nA,1,B,C,2,img/a.png\n",
        )
        .unwrap();

        let deck = load_deck(&path).unwrap();
        assert_eq!(deck[0].image_path, dir.path().join("img/a.png"));
    }

    #[test]
    fn test_load_deck_missing_file() {
        let err = load_deck(Path::new("/nonexistent/deck.csv")).unwrap_err();
        assert!(matches!(err, CardError::Io { .. }));
    }
}
