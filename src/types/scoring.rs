use serde::Serialize;

/// Integer percentage in `0..=100`.
pub type Score = u8;

/// Rounds a non-negative mean to the nearest whole percentage, half up.
pub fn to_score(value: f64) -> Score {
    value.round().clamp(0.0, 100.0) as Score
}

/// Unweighted, rounded mean of already-rounded scores.
pub fn mean_score(scores: &[Score]) -> Score {
    if scores.is_empty() {
        return 0;
    }
    let total: u32 = scores.iter().copied().map(u32::from).sum();
    to_score(f64::from(total) / scores.len() as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn of(score: Score) -> Self {
        if score >= 75 {
            Self::Strong
        } else if score >= 55 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PsychometricResult {
    pub interest: Score,
    pub personality: Score,
    pub cognitive_style: Score,
    pub motivation: Score,
    pub overall: Score,
}

impl PsychometricResult {
    pub fn new(interest: Score, personality: Score, cognitive_style: Score, motivation: Score) -> Self {
        Self {
            interest,
            personality,
            cognitive_style,
            motivation,
            overall: mean_score(&[interest, personality, cognitive_style, motivation]),
        }
    }

    pub fn categories(&self) -> [(&'static str, Score); 4] {
        [
            ("interest", self.interest),
            ("personality", self.personality),
            ("cognitive_style", self.cognitive_style),
            ("motivation", self.motivation),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechnicalResult {
    pub general_aptitude: Score,
    pub prerequisite_knowledge: Score,
    pub domain_specific: Score,
    pub overall: Score,
}

impl TechnicalResult {
    pub fn new(general_aptitude: Score, prerequisite_knowledge: Score, domain_specific: Score) -> Self {
        Self {
            general_aptitude,
            prerequisite_knowledge,
            domain_specific,
            overall: mean_score(&[general_aptitude, prerequisite_knowledge, domain_specific]),
        }
    }

    pub fn categories(&self) -> [(&'static str, Score); 3] {
        [
            ("general_aptitude", self.general_aptitude),
            ("prerequisite_knowledge", self.prerequisite_knowledge),
            ("domain_specific", self.domain_specific),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WiscarResult {
    pub will: Score,
    pub interest: Score,
    pub skill: Score,
    pub cognitive_readiness: Score,
    pub ability_to_learn: Score,
    pub real_world_alignment: Score,
    pub overall: Score,
}

impl WiscarResult {
    pub fn new(
        will: Score,
        interest: Score,
        skill: Score,
        cognitive_readiness: Score,
        ability_to_learn: Score,
        real_world_alignment: Score,
    ) -> Self {
        Self {
            will,
            interest,
            skill,
            cognitive_readiness,
            ability_to_learn,
            real_world_alignment,
            overall: mean_score(&[
                will,
                interest,
                skill,
                cognitive_readiness,
                ability_to_learn,
                real_world_alignment,
            ]),
        }
    }

    pub fn categories(&self) -> [(&'static str, Score); 6] {
        [
            ("will", self.will),
            ("interest", self.interest),
            ("skill", self.skill),
            ("cognitive_readiness", self.cognitive_readiness),
            ("ability_to_learn", self.ability_to_learn),
            ("real_world_alignment", self.real_world_alignment),
        ]
    }
}
