use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Puzzle difficulty. The usual levels get their own variants; anything else a
/// dataset uses is kept verbatim so no record is lost over an unfamiliar label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    pub fn display_name(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Other(raw) => raw,
        }
    }

    /// Case-insensitive comparison against a free-text filter such as a query parameter.
    pub fn matches(&self, filter: &str) -> bool {
        self.display_name().to_lowercase() == filter.to_lowercase()
    }
}

impl From<&str> for Difficulty {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Other(s.to_string()),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for Difficulty {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Difficulty::from(raw.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_ignores_case() {
        assert!(Difficulty::Easy.matches("easy"));
        assert!(Difficulty::Easy.matches("EASY"));
        assert!(Difficulty::Hard.matches("Hard"));
        assert!(!Difficulty::Medium.matches("hard"));
        assert!(!Difficulty::Medium.matches("extreme"));
    }

    #[test]
    fn test_matches_is_exact_apart_from_case() {
        assert!(!Difficulty::Easy.matches("easy "));
        assert!(!Difficulty::Easy.matches(" easy"));
    }

    #[test]
    fn test_serializes_display_name() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
    }

    #[test]
    fn test_deserializes_any_case() {
        let d: Difficulty = serde_json::from_str("\"hArD\"").unwrap();
        assert_eq!(d, Difficulty::Hard);
    }

    #[test]
    fn test_unknown_label_is_kept() {
        let d: Difficulty = serde_json::from_str("\"Expert\"").unwrap();
        assert_eq!(d, Difficulty::Other("Expert".to_string()));
        assert!(d.matches("expert"));
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"Expert\"");
    }
}
