//! Card record - one row of card attributes.

use std::path::PathBuf;

/// The attributes of a single card.
///
/// All fields are kept as text; cost and attack are displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    /// 1-based source line (0 when not read from a file).
    pub line: u64,
    pub title: String,
    pub cost: String,
    /// The card's type line (the `type` column).
    pub kind: String,
    pub ability: String,
    pub atk: String,
    pub image_path: PathBuf,
}

impl CardRecord {
    pub fn new(
        title: impl Into<String>,
        cost: impl ToString,
        kind: impl Into<String>,
        ability: impl Into<String>,
        atk: impl ToString,
        image_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            line: 0,
            title: title.into(),
            cost: cost.to_string(),
            kind: kind.into(),
            ability: ability.into(),
            atk: atk.to_string(),
            image_path: image_path.into(),
        }
    }

    /// Set the source line.
    pub fn at_line(mut self, line: u64) -> Self {
        self.line = line;
        self
    }

    /// Text drawn in the attack slot.
    pub fn attack_label(&self) -> String {
        format!("ATK: {}", self.atk)
    }

    /// Short identifier for reports: `line 4 "Goblin"`.
    pub fn describe(&self) -> String {
        if self.line > 0 {
            format!("line {} \"{}\"", self.line, self.title)
        } else {
            format!("\"{}\"", self.title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_fields_stringified() {
        let record = CardRecord::new("Goblin", 2, "Creature", "", 3, "goblin.png");
        assert_eq!(record.cost, "2");
        assert_eq!(record.attack_label(), "ATK: 3");
    }

    #[test]
    fn test_describe() {
        let record = CardRecord::new("Goblin", "2", "Creature", "", "3", "g.png");
        assert_eq!(record.describe(), "\"Goblin\"");
        assert_eq!(record.at_line(4).describe(), "line 4 \"Goblin\"");
    }
}
