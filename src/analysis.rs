//! Summarization result types.
//!
//! These mirror the JSON the summarization service is asked to return:
//! `{ "summary": ..., "politicalScore": ..., "keyFigures": [...] }`.

use serde::{Deserialize, Deserializer, Serialize};

/// Lowest and highest lean score.
pub const SCORE_RANGE: (f64, f64) = (-10.0, 10.0);

/// At most this many key figures are kept.
pub const MAX_KEY_FIGURES: usize = 5;

/// Scores closer to zero than this are reported as centre.
const CENTER_BAND: f64 = 1.0;

/// Political lean of the source text, clamped to −10 (left) ..= 10 (right).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PoliticalScore(f64);

impl PoliticalScore {
    /// Clamp `value` into range. NaN becomes neutral.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(SCORE_RANGE.0, SCORE_RANGE.1))
    }

    /// The clamped score.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Coarse left/centre/right bucket.
    #[must_use]
    pub fn lean(self) -> Lean {
        if self.0 <= -CENTER_BAND {
            Lean::Left
        } else if self.0 >= CENTER_BAND {
            Lean::Right
        } else {
            Lean::Center
        }
    }

    /// Position on a left-to-right gauge, 0.0 ..= 100.0.
    #[must_use]
    pub fn gauge_percent(self) -> f64 {
        (self.0 - SCORE_RANGE.0) / (SCORE_RANGE.1 - SCORE_RANGE.0) * 100.0
    }
}

impl Default for PoliticalScore {
    fn default() -> Self {
        Self(0.0)
    }
}

impl<'de> Deserialize<'de> for PoliticalScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::new)
    }
}

impl std::fmt::Display for PoliticalScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Coarse lean bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lean {
    Left,
    Center,
    Right,
}

impl std::fmt::Display for Lean {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Left => "Left-Leaning",
            Self::Center => "Center",
            Self::Right => "Right-Leaning",
        })
    }
}

/// A person named in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFigure {
    /// Full name.
    pub name: String,
    /// Short role or title, e.g. "Senator".
    pub role: String,
}

/// Summary, lean score and key figures for one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Neutral summary as a bulleted list.
    pub summary: String,

    /// Political lean of the source.
    pub political_score: PoliticalScore,

    /// Up to [`MAX_KEY_FIGURES`] people mentioned in the source.
    #[serde(default, deserialize_with = "lenient_figures")]
    pub key_figures: Vec<KeyFigure>,
}

impl Analysis {
    /// Summary lines with bullet markers stripped, blank lines dropped.
    #[must_use]
    pub fn bullets(&self) -> Vec<&str> {
        self.summary
            .lines()
            .map(|line| line.trim().trim_start_matches(['*', '-', '•']).trim())
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// Accept a missing, null or non-array `keyFigures` as empty, skip
/// malformed entries, and cap the list.
fn lenient_figures<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<KeyFigure>, D::Error> {
    let raw = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = raw else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<KeyFigure>(item).ok())
        .take(MAX_KEY_FIGURES)
        .collect())
}
