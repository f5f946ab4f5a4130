/// Neutral Likert response used when a scale item has no answer.
pub const NEUTRAL_RESPONSE: u8 = 3;
pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

pub const LIKERT_LABELS: [(u8, &str); 5] = [
    (1, "Strongly Disagree"),
    (2, "Disagree"),
    (3, "Neutral"),
    (4, "Agree"),
    (5, "Strongly Agree"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PsychometricCategory {
    Interest,
    Personality,
    CognitiveStyle,
    Motivation,
}

impl PsychometricCategory {
    pub const ALL: [Self; 4] = [
        Self::Interest,
        Self::Personality,
        Self::CognitiveStyle,
        Self::Motivation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Interest => "Interest Assessment",
            Self::Personality => "Personality Fit",
            Self::CognitiveStyle => "Cognitive Style",
            Self::Motivation => "Motivation Analysis",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechnicalCategory {
    GeneralAptitude,
    PrerequisiteKnowledge,
    DomainSpecific,
}

impl TechnicalCategory {
    pub const ALL: [Self; 3] = [
        Self::GeneralAptitude,
        Self::PrerequisiteKnowledge,
        Self::DomainSpecific,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::GeneralAptitude => "General Aptitude",
            Self::PrerequisiteKnowledge => "Prerequisite Knowledge",
            Self::DomainSpecific => "Domain-Specific Skills",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WiscarCategory {
    Will,
    Interest,
    Skill,
    CognitiveReadiness,
    AbilityToLearn,
    RealWorldAlignment,
}

impl WiscarCategory {
    pub const ALL: [Self; 6] = [
        Self::Will,
        Self::Interest,
        Self::Skill,
        Self::CognitiveReadiness,
        Self::AbilityToLearn,
        Self::RealWorldAlignment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::CognitiveReadiness => "Cognitive Readiness",
            Self::AbilityToLearn => "Ability to Learn",
            Self::RealWorldAlignment => "Real-World Alignment",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Will => "Inner motivation & consistency",
            Self::Interest => "Genuine curiosity & relevance",
            Self::Skill => "Current technical & soft skills",
            Self::CognitiveReadiness => "Analytical thinking & problem-solving",
            Self::AbilityToLearn => "Openness to feedback & persistence",
            Self::RealWorldAlignment => "Job fit & day-to-day applicability",
        }
    }
}

/// A 1-5 agreement item. Reverse items are phrased against their category.
#[derive(Debug, Clone, Copy)]
pub struct LikertQuestion {
    pub id: &'static str,
    pub text: &'static str,
    pub category: PsychometricCategory,
    pub reverse: bool,
}

impl LikertQuestion {
    /// Effective 1-5 score once reverse phrasing is undone.
    pub fn effective(&self, response: u8) -> i32 {
        let response = i32::from(response);
        if self.reverse {
            6 - response
        } else {
            response
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceFormat {
    MultipleChoice,
    Scenario,
}

#[derive(Debug, Clone, Copy)]
pub struct ChoiceOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// A multiple-choice item with exactly one correct option.
#[derive(Debug, Clone, Copy)]
pub struct CorrectnessQuestion {
    pub id: &'static str,
    pub text: &'static str,
    pub category: TechnicalCategory,
    pub format: ChoiceFormat,
    pub options: &'static [ChoiceOption],
    pub correct: &'static str,
}

impl CorrectnessQuestion {
    pub fn option(&self, key: &str) -> Option<&'static ChoiceOption> {
        self.options.iter().find(|option| option.key == key)
    }

    pub fn is_correct(&self, key: &str) -> bool {
        self.correct == key
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WeightedChoice {
    pub key: &'static str,
    pub label: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, Copy)]
pub enum WiscarKind {
    Likert,
    Weighted(&'static [WeightedChoice]),
}

#[derive(Debug, Clone, Copy)]
pub struct WiscarQuestion {
    pub id: &'static str,
    pub text: &'static str,
    pub category: WiscarCategory,
    pub kind: WiscarKind,
}

impl WiscarQuestion {
    pub fn choice(&self, key: &str) -> Option<&'static WeightedChoice> {
        match self.kind {
            WiscarKind::Likert => None,
            WiscarKind::Weighted(choices) => choices.iter().find(|choice| choice.key == key),
        }
    }
}
