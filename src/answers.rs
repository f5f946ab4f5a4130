//! Answer collection. An [`AnswerSet`] keeps one response per question in
//! the order the questions were first answered. The `record_*` functions
//! check every response against the question bank before storing it.

use crate::bank::{psychometric, technical, wiscar, Instrument};
use crate::error::{AssessError, Result};
use crate::types::question::{WiscarKind, LIKERT_MAX, LIKERT_MIN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet<V> {
    entries: Vec<(&'static str, V)>,
}

impl<V> Default for AnswerSet<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> AnswerSet<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[allow(dead_code)]
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub(crate) fn insert(&mut self, id: &'static str, value: V) {
        match self.entries.iter_mut().find(|(entry_id, _)| *entry_id == id) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((id, value)),
        }
    }
}

pub type PsychometricAnswers = AnswerSet<u8>;
pub type TechnicalAnswers = AnswerSet<&'static str>;
/// WISCAR responses are stored on the 1-5 scale, weighted choices already
/// resolved to their score.
pub type WiscarAnswers = AnswerSet<u8>;

fn unknown(instrument: Instrument, id: &str) -> AssessError {
    AssessError::UnknownQuestion {
        instrument: instrument.key().to_string(),
        id: id.to_string(),
    }
}

fn parse_likert(id: &str, raw: &str) -> Result<u8> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|value| (LIKERT_MIN..=LIKERT_MAX).contains(value))
        .ok_or_else(|| AssessError::InvalidResponse {
            id: id.to_string(),
            reason: format!(
                "expected an integer from {LIKERT_MIN} to {LIKERT_MAX}, got '{}'",
                raw.trim()
            ),
        })
}

pub fn record_psychometric(answers: &mut PsychometricAnswers, id: &str, raw: &str) -> Result<()> {
    let question = psychometric::find(id).ok_or_else(|| unknown(Instrument::Psychometric, id))?;
    let value = parse_likert(question.id, raw)?;
    answers.insert(question.id, value);
    Ok(())
}

pub fn record_technical(answers: &mut TechnicalAnswers, id: &str, raw: &str) -> Result<()> {
    let question = technical::find(id).ok_or_else(|| unknown(Instrument::Technical, id))?;
    let option = question
        .option(raw.trim())
        .ok_or_else(|| AssessError::InvalidResponse {
            id: question.id.to_string(),
            reason: format!("'{}' is not one of the offered options", raw.trim()),
        })?;
    answers.insert(question.id, option.key);
    Ok(())
}

pub fn record_wiscar(answers: &mut WiscarAnswers, id: &str, raw: &str) -> Result<()> {
    let question = wiscar::find(id).ok_or_else(|| unknown(Instrument::Wiscar, id))?;
    let value = match question.kind {
        WiscarKind::Likert => parse_likert(question.id, raw)?,
        WiscarKind::Weighted(_) => {
            question
                .choice(raw.trim())
                .ok_or_else(|| AssessError::InvalidResponse {
                    id: question.id.to_string(),
                    reason: format!("'{}' is not one of the offered choices", raw.trim()),
                })?
                .score
        }
    };
    answers.insert(question.id, value);
    Ok(())
}
