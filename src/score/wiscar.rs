use crate::answers::WiscarAnswers;
use crate::bank::wiscar::QUESTIONS;
use crate::types::question::WiscarCategory;
use crate::types::scoring::{Score, WiscarResult};

use super::{scale_category, scale_response};

fn category_score(answers: &WiscarAnswers, category: WiscarCategory) -> Score {
    let values: Vec<i32> = QUESTIONS
        .iter()
        .filter(|question| question.category == category)
        .map(|question| i32::from(scale_response(answers, question.id)))
        .collect();
    let score = scale_category(&values);
    tracing::debug!(?category, score, "wiscar dimension scored");
    score
}

pub fn score_wiscar(answers: &WiscarAnswers) -> WiscarResult {
    let result = WiscarResult::new(
        category_score(answers, WiscarCategory::Will),
        category_score(answers, WiscarCategory::Interest),
        category_score(answers, WiscarCategory::Skill),
        category_score(answers, WiscarCategory::CognitiveReadiness),
        category_score(answers, WiscarCategory::AbilityToLearn),
        category_score(answers, WiscarCategory::RealWorldAlignment),
    );
    tracing::info!(overall = result.overall, "wiscar instrument scored");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::record_wiscar;

    #[test]
    fn all_neutral_scores_sixty() {
        let mut answers = WiscarAnswers::new();
        for (id, raw) in [
            ("w1", "3"),
            ("w2", "3"),
            ("i1", "3"),
            ("i2", "3"),
            ("s1", "intermediate"),
            ("s2", "somewhat"),
            ("c1", "3"),
            ("c2", "3"),
            ("a1", "3"),
            ("a2", "3"),
            ("r1", "startup"),
            ("r2", "somewhat"),
        ] {
            record_wiscar(&mut answers, id, raw).expect("valid response");
        }
        let result = score_wiscar(&answers);
        assert!(result.categories().iter().all(|(_, score)| *score == 60));
        assert_eq!(result.overall, 60);
    }

    #[test]
    fn missing_answers_default_to_neutral() {
        assert_eq!(score_wiscar(&WiscarAnswers::new()).overall, 60);
    }

    #[test]
    fn weighted_choices_feed_their_dimension() {
        let mut answers = WiscarAnswers::new();
        record_wiscar(&mut answers, "r1", "product").expect("valid choice");
        record_wiscar(&mut answers, "r2", "important").expect("valid choice");
        record_wiscar(&mut answers, "s1", "beginner").expect("valid choice");

        let result = score_wiscar(&answers);
        assert_eq!(result.real_world_alignment, 90);
        // beginner (2) next to a defaulted 3
        assert_eq!(result.skill, 50);
        assert_eq!(result.will, 60);
        // (60 * 4 + 90 + 50) / 6 = 63.33
        assert_eq!(result.overall, 63);
    }
}
