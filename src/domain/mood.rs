//! Mood kinds and their display metadata

use crate::error::MoodjourError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five recognized moods, best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MoodType {
    #[default]
    Excellent,
    Good,
    Neutral,
    Bad,
    Terrible,
}

/// Display glyph, label and color for a mood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodTypeInfo {
    pub emoji: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

const EXCELLENT: MoodTypeInfo = MoodTypeInfo {
    emoji: "😄",
    label: "Excellent",
    color: "#10b981",
};
const GOOD: MoodTypeInfo = MoodTypeInfo {
    emoji: "🙂",
    label: "Good",
    color: "#34d399",
};
const NEUTRAL: MoodTypeInfo = MoodTypeInfo {
    emoji: "😐",
    label: "Neutral",
    color: "#fbbf24",
};
const BAD: MoodTypeInfo = MoodTypeInfo {
    emoji: "😞",
    label: "Bad",
    color: "#fb923c",
};
const TERRIBLE: MoodTypeInfo = MoodTypeInfo {
    emoji: "😡",
    label: "Terrible",
    color: "#ef4444",
};

impl MoodType {
    pub const ALL: [MoodType; 5] = [
        MoodType::Excellent,
        MoodType::Good,
        MoodType::Neutral,
        MoodType::Bad,
        MoodType::Terrible,
    ];

    /// Static display metadata for this mood
    pub fn info(&self) -> &'static MoodTypeInfo {
        match self {
            MoodType::Excellent => &EXCELLENT,
            MoodType::Good => &GOOD,
            MoodType::Neutral => &NEUTRAL,
            MoodType::Bad => &BAD,
            MoodType::Terrible => &TERRIBLE,
        }
    }

    /// Storage key used in persisted records
    pub fn key(&self) -> &'static str {
        match self {
            MoodType::Excellent => "excellent",
            MoodType::Good => "good",
            MoodType::Neutral => "neutral",
            MoodType::Bad => "bad",
            MoodType::Terrible => "terrible",
        }
    }

    pub fn emoji(&self) -> &'static str {
        self.info().emoji
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }
}

impl fmt::Display for MoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MoodType {
    type Err = MoodjourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        MoodType::ALL
            .into_iter()
            .find(|mood| mood.key() == normalized)
            .ok_or_else(|| MoodjourError::InvalidMoodType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid_moods() {
        assert_eq!(MoodType::from_str("excellent").unwrap(), MoodType::Excellent);
        assert_eq!(MoodType::from_str("good").unwrap(), MoodType::Good);
        assert_eq!(MoodType::from_str("neutral").unwrap(), MoodType::Neutral);
        assert_eq!(MoodType::from_str("bad").unwrap(), MoodType::Bad);
        assert_eq!(MoodType::from_str("terrible").unwrap(), MoodType::Terrible);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(MoodType::from_str("GOOD").unwrap(), MoodType::Good);
        assert_eq!(MoodType::from_str(" Bad ").unwrap(), MoodType::Bad);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        match MoodType::from_str("ecstatic") {
            Err(MoodjourError::InvalidMoodType(value)) => assert_eq!(value, "ecstatic"),
            other => panic!("Expected InvalidMoodType, got {:?}", other),
        }
    }

    #[test]
    fn test_info_table() {
        assert_eq!(MoodType::Good.emoji(), "🙂");
        assert_eq!(MoodType::Terrible.label(), "Terrible");
        assert_eq!(MoodType::Neutral.info().color, "#fbbf24");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&MoodType::Excellent).unwrap();
        assert_eq!(json, "\"excellent\"");

        let parsed: MoodType = serde_json::from_str("\"terrible\"").unwrap();
        assert_eq!(parsed, MoodType::Terrible);

        assert!(serde_json::from_str::<MoodType>("\"meh\"").is_err());
    }

    #[test]
    fn test_display_matches_key() {
        for mood in MoodType::ALL {
            assert_eq!(mood.to_string(), mood.key());
        }
    }
}
