use serde::{Deserialize, Serialize};

use crate::core::error::DelveError;

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
}

impl ScoreRecord {
    /// Control characters in `name` become spaces so a record always stays on one line.
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        let name: String = name.into();
        Self {
            name: name.chars().map(|c| if c.is_control() { ' ' } else { c }).collect(),
            score,
        }
    }

    /// Parses a `name,score` line. The name is everything before the last comma,
    /// so names may contain commas themselves.
    pub fn parse_line(line: &str) -> Result<Self, DelveError> {
        let bad = || DelveError::BadRecord {
            line: line.to_string(),
        };
        let (name, score) = line.trim_end().rsplit_once(',').ok_or_else(bad)?;
        let score = score.trim().parse::<u32>().map_err(|_| bad())?;
        Ok(Self::new(name, score))
    }

    pub fn to_line(&self) -> String {
        format!("{},{}", self.name, self.score)
    }
}

/// Highest score first. Ties keep their recorded order.
pub fn standings(mut records: Vec<ScoreRecord>) -> Vec<ScoreRecord> {
    records.sort_by(|a, b| b.score.cmp(&a.score));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(
            ScoreRecord::parse_line("Ada,320").unwrap(),
            ScoreRecord::new("Ada", 320)
        );
    }

    #[test]
    fn test_line_breaks_in_name_stay_on_one_line() {
        let record = ScoreRecord::new("Ada\nMallory,9999\r", 5);
        assert_eq!(record.name, "Ada Mallory,9999 ");
        let line = record.to_line();
        assert!(!line.contains('\n') && !line.contains('\r'));
        assert_eq!(ScoreRecord::parse_line(&line).unwrap(), record);
    }

    #[test]
    fn test_parse_line_name_with_comma() {
        let record = ScoreRecord::parse_line("Lovelace, Ada,410\n").unwrap();
        assert_eq!(record.name, "Lovelace, Ada");
        assert_eq!(record.score, 410);
        assert_eq!(record.to_line(), "Lovelace, Ada,410");
    }

    #[test]
    fn test_parse_line_rejects_garbage() {
        assert!(matches!(
            ScoreRecord::parse_line("no score here"),
            Err(DelveError::BadRecord { .. })
        ));
        assert!(ScoreRecord::parse_line("Ada,lots").is_err());
        assert!(ScoreRecord::parse_line("Ada,-5").is_err());
    }

    #[test]
    fn test_standings_sorted_and_stable() {
        let records = vec![
            ScoreRecord::new("a", 100),
            ScoreRecord::new("b", 300),
            ScoreRecord::new("c", 100),
            ScoreRecord::new("d", 200),
        ];
        let names: Vec<String> = standings(records).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }
}
