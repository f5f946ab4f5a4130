use crate::types::question::{WeightedChoice, WiscarCategory, WiscarKind, WiscarQuestion};

use WiscarCategory::{
    AbilityToLearn, CognitiveReadiness, Interest, RealWorldAlignment, Skill, Will,
};

const fn likert(id: &'static str, text: &'static str, category: WiscarCategory) -> WiscarQuestion {
    WiscarQuestion {
        id,
        text,
        category,
        kind: WiscarKind::Likert,
    }
}

const fn weighted(
    id: &'static str,
    text: &'static str,
    category: WiscarCategory,
    choices: &'static [WeightedChoice],
) -> WiscarQuestion {
    WiscarQuestion {
        id,
        text,
        category,
        kind: WiscarKind::Weighted(choices),
    }
}

pub static QUESTIONS: [WiscarQuestion; 12] = [
    likert(
        "w1",
        "I consistently follow through on design projects even when they become challenging or repetitive",
        Will,
    ),
    likert(
        "w2",
        "I maintain high standards for my work even when facing tight deadlines",
        Will,
    ),
    likert(
        "i1",
        "I actively seek out articles, tutorials, and resources about design systems in my free time",
        Interest,
    ),
    likert(
        "i2",
        "I find myself analyzing and critiquing the design consistency of websites and apps I use",
        Interest,
    ),
    weighted(
        "s1",
        "How would you rate your current CSS and HTML skills?",
        Skill,
        &[
            WeightedChoice {
                key: "beginner",
                label: "Beginner - Basic understanding",
                score: 2,
            },
            WeightedChoice {
                key: "intermediate",
                label: "Intermediate - Can build responsive layouts",
                score: 3,
            },
            WeightedChoice {
                key: "advanced",
                label: "Advanced - Proficient with modern CSS features",
                score: 4,
            },
            WeightedChoice {
                key: "expert",
                label: "Expert - Can architect complex styling systems",
                score: 5,
            },
        ],
    ),
    weighted(
        "s2",
        "How comfortable are you with design collaboration and giving/receiving feedback?",
        Skill,
        &[
            WeightedChoice {
                key: "uncomfortable",
                label: "Uncomfortable - Prefer working alone",
                score: 2,
            },
            WeightedChoice {
                key: "somewhat",
                label: "Somewhat comfortable - With close colleagues",
                score: 3,
            },
            WeightedChoice {
                key: "comfortable",
                label: "Comfortable - Can facilitate design discussions",
                score: 4,
            },
            WeightedChoice {
                key: "expert",
                label: "Expert - Natural collaborator and facilitator",
                score: 5,
            },
        ],
    ),
    likert(
        "c1",
        "When I encounter a complex design problem, I naturally break it down into smaller, manageable components",
        CognitiveReadiness,
    ),
    likert(
        "c2",
        "I can easily switch between big-picture thinking and detailed execution",
        CognitiveReadiness,
    ),
    likert(
        "a1",
        "I actively seek feedback on my work and use it to improve",
        AbilityToLearn,
    ),
    likert(
        "a2",
        "When learning a new tool or concept, I persist through initial confusion and frustration",
        AbilityToLearn,
    ),
    weighted(
        "r1",
        "Which work environment appeals to you most?",
        RealWorldAlignment,
        &[
            WeightedChoice {
                key: "startup",
                label: "Fast-paced startup - Wearing many hats",
                score: 3,
            },
            WeightedChoice {
                key: "corporate",
                label: "Large corporation - Specialized role with clear processes",
                score: 4,
            },
            WeightedChoice {
                key: "agency",
                label: "Design agency - Variety of client projects",
                score: 3,
            },
            WeightedChoice {
                key: "product",
                label: "Product company - Deep focus on one system",
                score: 5,
            },
        ],
    ),
    weighted(
        "r2",
        "How important is having a clear impact measurement for your design work?",
        RealWorldAlignment,
        &[
            WeightedChoice {
                key: "not-important",
                label: "Not important - I trust the process",
                score: 2,
            },
            WeightedChoice {
                key: "somewhat",
                label: "Somewhat important - Nice to have metrics",
                score: 3,
            },
            WeightedChoice {
                key: "important",
                label: "Important - I want to see usage data",
                score: 4,
            },
            WeightedChoice {
                key: "critical",
                label: "Critical - I need clear success metrics",
                score: 5,
            },
        ],
    ),
];

pub fn find(id: &str) -> Option<&'static WiscarQuestion> {
    QUESTIONS.iter().find(|question| question.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_choices_stay_on_scale() {
        for question in &QUESTIONS {
            if let WiscarKind::Weighted(choices) = question.kind {
                assert!(choices.iter().all(|choice| (2..=5).contains(&choice.score)));
            }
        }
    }

    #[test]
    fn each_dimension_has_two_questions() {
        for category in WiscarCategory::ALL {
            let count = QUESTIONS
                .iter()
                .filter(|question| question.category == category)
                .count();
            assert_eq!(count, 2, "{category:?}");
        }
    }
}
