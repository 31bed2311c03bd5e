//! Score extraction from free-text score blocks, and the severity buckets the UI colours.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tried in order; the first pattern whose first match is within 0–100 wins.
/// The final catch-all can pick up an unrelated number from prose.
static SCORE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // 87/100, 87 / 100, 87 out of 100, 87%; a decimal score keeps its integer part
        r"(?i)(?:^|[^\d.])(\d+)(?:\.\d+)?\s*(?:/\s*100\b|out\s+of\s+100\b|%)",
        // score: 87, score of 87, score is 87
        r"(?i)score\s*(?:[:=]|of|is)?\s*(\d+)",
        // 87/10 and other loose fractions
        r"(?:^|[^\d.])(\d+)(?:\.\d+)?\s*/\s*\d+",
        // 87 points
        r"(?i)(?:^|[^\d.])(\d+)(?:\.\d+)?\s*points?\b",
        // leading number, possibly bold or after a heading marker
        r"\A[\s*#]*(\d+)",
        r"(\d+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("score pattern is valid"))
    .collect()
});

/// Extracts a 0–100 score from an OVERALL SCORE block. Returns 0 when nothing fits.
pub fn extract_score(text: &str) -> u8 {
    SCORE_PATTERNS
        .iter()
        .filter_map(|re| re.captures(text))
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .find(|n| *n <= 100)
        .map(|n| n as u8)
        .unwrap_or(0)
}

/// Coarse classification of a score, mapped to a colour by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSeverity {
    Excellent,
    Good,
    Fair,
    Poor,
    Weak,
}

impl ScoreSeverity {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ScoreSeverity::Excellent,
            80..=89 => ScoreSeverity::Good,
            70..=79 => ScoreSeverity::Fair,
            60..=69 => ScoreSeverity::Poor,
            _ => ScoreSeverity::Weak,
        }
    }
}
