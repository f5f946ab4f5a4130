use crate::answers::TechnicalAnswers;
use crate::bank::technical::QUESTIONS;
use crate::types::question::TechnicalCategory;
use crate::types::scoring::{to_score, Score, TechnicalResult};

const CORRECT: u32 = 100;

fn category_score(answers: &TechnicalAnswers, category: TechnicalCategory) -> Score {
    let marks: Vec<u32> = QUESTIONS
        .iter()
        .filter(|question| question.category == category)
        .map(|question| match answers.get(question.id) {
            Some(selected) if question.is_correct(selected) => CORRECT,
            // unanswered counts as wrong, unlike the scale instruments
            _ => 0,
        })
        .collect();
    if marks.is_empty() {
        return 0;
    }
    let total: u32 = marks.iter().sum();
    let score = to_score(f64::from(total) / marks.len() as f64);
    tracing::debug!(?category, score, "technical category scored");
    score
}

pub fn score_technical(answers: &TechnicalAnswers) -> TechnicalResult {
    let result = TechnicalResult::new(
        category_score(answers, TechnicalCategory::GeneralAptitude),
        category_score(answers, TechnicalCategory::PrerequisiteKnowledge),
        category_score(answers, TechnicalCategory::DomainSpecific),
    );
    tracing::info!(overall = result.overall, "technical instrument scored");
    result
}
