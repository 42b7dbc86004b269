use crate::types::checks::CheckItem;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Rounded percentage in 0..=100.
pub type Score = u8;

/// Outcome of one checklist pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub missing: Vec<CheckItem>,
    pub present: Vec<String>,
    pub score: Score,
}

/// Quality tier derived from the overall score and the compliance gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Raw,
    Bronze,
    Silver,
    Gold,
    Rhodium,
}

impl QualityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            QualityLevel::Raw => "raw",
            QualityLevel::Bronze => "bronze",
            QualityLevel::Silver => "silver",
            QualityLevel::Gold => "gold",
            QualityLevel::Rhodium => "rhodium",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "raw" => Ok(QualityLevel::Raw),
            "bronze" => Ok(QualityLevel::Bronze),
            "silver" => Ok(QualityLevel::Silver),
            "gold" => Ok(QualityLevel::Gold),
            "rhodium" => Ok(QualityLevel::Rhodium),
            other => Err(format!("unknown quality level: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditResult {
    pub structure: AnalysisResult,
    pub community: AnalysisResult,
    pub overall_score: Score,
    pub level: QualityLevel,
    pub recommendations: Vec<String>,
}
