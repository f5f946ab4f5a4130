pub mod psychometric;
pub mod technical;
pub mod wiscar;

pub use psychometric::score_psychometric;
pub use technical::score_technical;
pub use wiscar::score_wiscar;

use crate::answers::AnswerSet;
use crate::types::question::NEUTRAL_RESPONSE;
use crate::types::scoring::{to_score, Score};

/// Scale response for `id`, falling back to neutral when it is absent.
/// Zero is not a valid response and is treated as absent.
pub(crate) fn scale_response(answers: &AnswerSet<u8>, id: &str) -> u8 {
    answers
        .get(id)
        .copied()
        .filter(|value| *value != 0)
        .unwrap_or(NEUTRAL_RESPONSE)
}

/// Mean of 1-5 item scores lifted onto the percentage scale.
pub(crate) fn scale_category(values: &[i32]) -> Score {
    if values.is_empty() {
        return 0;
    }
    let total: i32 = values.iter().sum();
    to_score(f64::from(total) / values.len() as f64 * 20.0)
}

/// Ids from `bank_ids` that have no entry in `answers`.
pub fn unanswered<'a, V>(
    answers: &AnswerSet<V>,
    bank_ids: impl IntoIterator<Item = &'a str>,
) -> Vec<&'a str> {
    bank_ids
        .into_iter()
        .filter(|id| !answers.contains(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_category_maps_one_to_five_onto_percentages() {
        assert_eq!(scale_category(&[1, 1]), 20);
        assert_eq!(scale_category(&[3, 3, 3]), 60);
        assert_eq!(scale_category(&[5, 4, 4, 4, 4]), 84);
        assert_eq!(scale_category(&[]), 0);
    }

    #[test]
    fn missing_and_zero_responses_fall_back_to_neutral() {
        let mut answers = AnswerSet::new();
        answers.insert("a", 0);
        answers.insert("b", 5);
        assert_eq!(scale_response(&answers, "a"), 3);
        assert_eq!(scale_response(&answers, "b"), 5);
        assert_eq!(scale_response(&answers, "c"), 3);
    }

    #[test]
    fn unanswered_lists_bank_ids_without_entries() {
        let mut answers: AnswerSet<u8> = AnswerSet::new();
        answers.insert("w1", 4);
        assert_eq!(unanswered(&answers, ["w1", "w2"]), vec!["w2"]);
    }
}
