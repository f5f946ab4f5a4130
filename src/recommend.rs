use crate::types::config::RecommendationThresholds;
use crate::types::report::{CareerPathMatch, Decision, FinalResult, MatchLevel};
use crate::types::scoring::{mean_score, PsychometricResult, Score, TechnicalResult, WiscarResult};

const ADVANCED_PATH: &[&str] = &[
    "Advanced Design Systems Patterns",
    "Component API Design",
    "Design System Governance",
    "Cross-Platform Token Management",
];

const FUNDAMENTALS_PATH: &[&str] = &[
    "Design Systems Fundamentals",
    "Component-Based Design",
    "CSS Architecture & Methodologies",
    "Design-Development Collaboration",
];

const FOUNDATIONAL_PATH: &[&str] = &[
    "UI/UX Design Fundamentals",
    "Front-end Development Basics",
    "Design Tools Proficiency",
    "Basic Design Principles",
];

const STRONG_NEXT_STEPS: &[&str] = &[
    "Apply for Design Systems positions",
    "Start a portfolio project showcasing component libraries",
    "Join design systems communities and conferences",
];

const DEVELOPING_NEXT_STEPS: &[&str] = &[
    "Take foundational courses in identified weak areas",
    "Build sample design system components",
    "Seek mentorship from experienced practitioners",
];

const ALTERNATIVE_NEXT_STEPS: &[&str] = &[
    "Consider UI/UX design or front-end development first",
    "Build fundamental design and technical skills",
    "Retake assessment after 6-12 months of learning",
];

fn decide(overall: Score, thresholds: &RecommendationThresholds) -> Decision {
    if overall >= thresholds.strong_fit {
        Decision::Yes
    } else if overall >= thresholds.developing {
        Decision::Maybe
    } else {
        Decision::No
    }
}

fn two_way(score: Score, threshold: Score, below: MatchLevel) -> MatchLevel {
    if score >= threshold {
        MatchLevel::Good
    } else {
        below
    }
}

fn career_paths(
    overall: Score,
    psychometric: &PsychometricResult,
    technical: &TechnicalResult,
    wiscar: &WiscarResult,
) -> Vec<CareerPathMatch> {
    let architect = if overall >= 80 {
        MatchLevel::Excellent
    } else if overall >= 65 {
        MatchLevel::Good
    } else {
        MatchLevel::NeedsDevelopment
    };

    vec![
        CareerPathMatch {
            title: "Design System Architect",
            level: "Senior",
            description: "Lead the strategic vision and technical architecture of enterprise design systems.",
            fit: architect,
        },
        CareerPathMatch {
            title: "UI Component Developer",
            level: "Mid-Level",
            description: "Build and maintain reusable UI components with focus on technical implementation.",
            fit: two_way(technical.overall, 70, MatchLevel::NeedsDevelopment),
        },
        CareerPathMatch {
            title: "DesignOps Specialist",
            level: "Mid-Senior",
            description: "Optimize design processes, tooling, and collaboration across design teams.",
            fit: two_way(wiscar.real_world_alignment, 70, MatchLevel::ConsiderAlternatives),
        },
        CareerPathMatch {
            title: "Product Designer",
            level: "All Levels",
            description: "Focus on user experience design with systematic approach to interface design.",
            fit: two_way(psychometric.overall, 60, MatchLevel::ConsiderAlternatives),
        },
    ]
}

/// Final recommendation with the standard 75 / 55 tier cut points.
#[allow(dead_code)]
pub fn recommend(
    psychometric: &PsychometricResult,
    technical: &TechnicalResult,
    wiscar: &WiscarResult,
) -> FinalResult {
    recommend_with(
        psychometric,
        technical,
        wiscar,
        &RecommendationThresholds::default(),
    )
}

pub fn recommend_with(
    psychometric: &PsychometricResult,
    technical: &TechnicalResult,
    wiscar: &WiscarResult,
    thresholds: &RecommendationThresholds,
) -> FinalResult {
    let overall = mean_score(&[psychometric.overall, technical.overall, wiscar.overall]);
    let decision = decide(overall, thresholds);
    let (learning_path, next_steps) = match decision {
        Decision::Yes => (ADVANCED_PATH, STRONG_NEXT_STEPS),
        Decision::Maybe => (FUNDAMENTALS_PATH, DEVELOPING_NEXT_STEPS),
        Decision::No => (FOUNDATIONAL_PATH, ALTERNATIVE_NEXT_STEPS),
    };
    tracing::info!(overall, decision = decision.as_str(), "recommendation computed");

    FinalResult {
        overall,
        decision,
        title: decision.title(),
        description: decision.description(),
        career_paths: career_paths(overall, psychometric, technical, wiscar),
        learning_path,
        next_steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn psychometric(overall: Score) -> PsychometricResult {
        PsychometricResult::new(overall, overall, overall, overall)
    }

    fn technical(overall: Score) -> TechnicalResult {
        TechnicalResult::new(overall, overall, overall)
    }

    fn wiscar(overall: Score) -> WiscarResult {
        WiscarResult::new(overall, overall, overall, overall, overall, overall)
    }

    fn fit_of(result: &FinalResult, title: &str) -> MatchLevel {
        result
            .career_paths
            .iter()
            .find(|path| path.title == title)
            .map(|path| path.fit)
            .expect("career path should exist")
    }

    #[test]
    fn neutral_profile_with_perfect_technical_is_maybe() {
        let result = recommend(&psychometric(60), &technical(100), &wiscar(60));
        assert_eq!(result.overall, 73);
        assert_eq!(result.decision, Decision::Maybe);
        assert_eq!(result.title, "Potential with Development Needed");
        assert_eq!(result.learning_path, FUNDAMENTALS_PATH);
        assert_eq!(fit_of(&result, "UI Component Developer"), MatchLevel::Good);
        assert_eq!(fit_of(&result, "Design System Architect"), MatchLevel::Good);
    }

    #[test]
    fn uniform_eighty_is_yes_with_excellent_architect_match() {
        let result = recommend(&psychometric(80), &technical(80), &wiscar(80));
        assert_eq!(result.overall, 80);
        assert_eq!(result.decision, Decision::Yes);
        assert_eq!(fit_of(&result, "Design System Architect"), MatchLevel::Excellent);
        assert_eq!(result.learning_path, ADVANCED_PATH);
        assert_eq!(result.next_steps, STRONG_NEXT_STEPS);
    }

    #[test]
    fn uniform_forty_is_no_with_foundational_path() {
        let result = recommend(&psychometric(40), &technical(40), &wiscar(40));
        assert_eq!(result.overall, 40);
        assert_eq!(result.decision, Decision::No);
        assert_eq!(result.learning_path, FOUNDATIONAL_PATH);
        assert_eq!(fit_of(&result, "Design System Architect"), MatchLevel::NeedsDevelopment);
        assert_eq!(fit_of(&result, "DesignOps Specialist"), MatchLevel::ConsiderAlternatives);
        assert_eq!(fit_of(&result, "Product Designer"), MatchLevel::ConsiderAlternatives);
    }

    #[test]
    fn career_paths_gate_on_their_own_signal() {
        let mut wiscar_result = wiscar(40);
        wiscar_result.real_world_alignment = 70;
        let result = recommend(&psychometric(60), &technical(69), &wiscar_result);

        assert_eq!(fit_of(&result, "UI Component Developer"), MatchLevel::NeedsDevelopment);
        assert_eq!(fit_of(&result, "DesignOps Specialist"), MatchLevel::Good);
        assert_eq!(fit_of(&result, "Product Designer"), MatchLevel::Good);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(recommend(&psychometric(75), &technical(75), &wiscar(75)).decision, Decision::Yes);
        assert_eq!(recommend(&psychometric(55), &technical(55), &wiscar(55)).decision, Decision::Maybe);
        assert_eq!(recommend(&psychometric(54), &technical(54), &wiscar(54)).decision, Decision::No);
    }

    #[test]
    fn custom_thresholds_move_the_tiers() {
        let thresholds = RecommendationThresholds {
            strong_fit: 85,
            developing: 70,
        };
        let result = recommend_with(&psychometric(80), &technical(80), &wiscar(80), &thresholds);
        assert_eq!(result.decision, Decision::Maybe);
        assert_eq!(result.learning_path, FUNDAMENTALS_PATH);
    }

    fn tier_rank(decision: Decision) -> u8 {
        match decision {
            Decision::No => 0,
            Decision::Maybe => 1,
            Decision::Yes => 2,
        }
    }

    #[test]
    fn raising_one_instrument_never_lowers_the_outcome() {
        let steps: Vec<Score> = (0..=100).step_by(5).collect();
        for &a in &steps {
            for &b in &steps {
                for slot in 0..3 {
                    let mut previous: Option<FinalResult> = None;
                    for &raised in &steps {
                        let overalls = match slot {
                            0 => (raised, a, b),
                            1 => (a, raised, b),
                            _ => (a, b, raised),
                        };
                        let result = recommend(
                            &psychometric(overalls.0),
                            &technical(overalls.1),
                            &wiscar(overalls.2),
                        );
                        if let Some(previous) = &previous {
                            assert!(result.overall >= previous.overall);
                            assert!(tier_rank(result.decision) >= tier_rank(previous.decision));
                        }
                        previous = Some(result);
                    }
                }
            }
        }
    }
}
