use crate::types::scoring::{PsychometricResult, Score, TechnicalResult, WiscarResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Yes,
    Maybe,
    No,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::Maybe => "MAYBE",
            Self::No => "NO",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Yes => "Excellent Fit for Design Systems",
            Self::Maybe => "Potential with Development Needed",
            Self::No => "Consider Alternative Paths",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Yes => "You demonstrate strong alignment across all dimensions. You're well-positioned to excel as a Design Systems Specialist.",
            Self::Maybe => "You show promise but would benefit from strengthening certain areas before pursuing this specialization.",
            Self::No => "Based on current assessment, other career paths might be better aligned with your profile and interests.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchLevel {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Good Match")]
    Good,
    #[serde(rename = "Needs Development")]
    NeedsDevelopment,
    #[serde(rename = "Consider Alternatives")]
    ConsiderAlternatives,
}

impl MatchLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match",
            Self::Good => "Good Match",
            Self::NeedsDevelopment => "Needs Development",
            Self::ConsiderAlternatives => "Consider Alternatives",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerPathMatch {
    pub title: &'static str,
    pub level: &'static str,
    pub description: &'static str,
    #[serde(rename = "match")]
    pub fit: MatchLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalResult {
    pub overall: Score,
    pub decision: Decision,
    pub title: &'static str,
    pub description: &'static str,
    pub career_paths: Vec<CareerPathMatch>,
    pub learning_path: &'static [&'static str],
    pub next_steps: &'static [&'static str],
}

/// Everything a finished assessment produced, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub generated_at: String,
    pub psychometric: PsychometricResult,
    pub technical: TechnicalResult,
    pub wiscar: WiscarResult,
    pub result: FinalResult,
}
