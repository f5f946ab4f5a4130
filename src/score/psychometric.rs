use crate::answers::PsychometricAnswers;
use crate::bank::psychometric::QUESTIONS;
use crate::types::question::PsychometricCategory;
use crate::types::scoring::{PsychometricResult, Score};

use super::{scale_category, scale_response};

fn category_score(answers: &PsychometricAnswers, category: PsychometricCategory) -> Score {
    let effective: Vec<i32> = QUESTIONS
        .iter()
        .filter(|question| question.category == category)
        .map(|question| question.effective(scale_response(answers, question.id)))
        .collect();
    let score = scale_category(&effective);
    tracing::debug!(?category, score, "psychometric category scored");
    score
}

pub fn score_psychometric(answers: &PsychometricAnswers) -> PsychometricResult {
    let result = PsychometricResult::new(
        category_score(answers, PsychometricCategory::Interest),
        category_score(answers, PsychometricCategory::Personality),
        category_score(answers, PsychometricCategory::CognitiveStyle),
        category_score(answers, PsychometricCategory::Motivation),
    );
    tracing::info!(overall = result.overall, "psychometric instrument scored");
    result
}
