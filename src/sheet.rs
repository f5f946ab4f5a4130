//! Completed answer sheets read from TOML or JSON files.
//!
//! ```toml
//! [psychometric]
//! int1 = 4
//!
//! [technical]
//! apt1 = 24
//! pre1 = "styling"
//!
//! [wiscar]
//! w1 = 5
//! s1 = "advanced"
//! ```

use crate::answers::{
    record_psychometric, record_technical, record_wiscar, PsychometricAnswers, TechnicalAnswers,
    WiscarAnswers,
};
use crate::bank::{psychometric, technical, wiscar, Instrument};
use crate::error::{AssessError, Result};
use crate::score::unanswered;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawResponse {
    Number(i64),
    Text(String),
}

impl RawResponse {
    fn as_text(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerSheet {
    #[serde(default)]
    pub psychometric: BTreeMap<String, RawResponse>,
    #[serde(default)]
    pub technical: BTreeMap<String, RawResponse>,
    #[serde(default)]
    pub wiscar: BTreeMap<String, RawResponse>,
}

/// Answer sets built from a sheet, plus the bank ids it left unanswered.
#[derive(Debug, Clone)]
pub struct CollectedAnswers {
    pub psychometric: PsychometricAnswers,
    pub technical: TechnicalAnswers,
    pub wiscar: WiscarAnswers,
    pub unanswered: Vec<(Instrument, &'static str)>,
}

pub fn load_sheet(path: &Path) -> Result<AnswerSheet> {
    if !path.exists() {
        return Err(AssessError::SheetParse(format!(
            "{}: file does not exist",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let sheet: AnswerSheet = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };
    Ok(sheet)
}

fn check_known(
    instrument: Instrument,
    entries: &BTreeMap<String, RawResponse>,
    known: impl Fn(&str) -> bool,
) -> Result<()> {
    match entries.keys().find(|id| !known(id.as_str())) {
        Some(id) => Err(AssessError::UnknownQuestion {
            instrument: instrument.key().to_string(),
            id: id.clone(),
        }),
        None => Ok(()),
    }
}

impl AnswerSheet {
    /// Feeds the sheet through the collectors in bank order.
    pub fn collect(&self) -> Result<CollectedAnswers> {
        check_known(Instrument::Psychometric, &self.psychometric, |id| {
            psychometric::find(id).is_some()
        })?;
        check_known(Instrument::Technical, &self.technical, |id| {
            technical::find(id).is_some()
        })?;
        check_known(Instrument::Wiscar, &self.wiscar, |id| wiscar::find(id).is_some())?;

        let mut psychometric_answers = PsychometricAnswers::new();
        for question in &psychometric::QUESTIONS {
            if let Some(raw) = self.psychometric.get(question.id) {
                record_psychometric(&mut psychometric_answers, question.id, &raw.as_text())?;
            }
        }

        let mut technical_answers = TechnicalAnswers::new();
        for question in &technical::QUESTIONS {
            if let Some(raw) = self.technical.get(question.id) {
                record_technical(&mut technical_answers, question.id, &raw.as_text())?;
            }
        }

        let mut wiscar_answers = WiscarAnswers::new();
        for question in &wiscar::QUESTIONS {
            if let Some(raw) = self.wiscar.get(question.id) {
                record_wiscar(&mut wiscar_answers, question.id, &raw.as_text())?;
            }
        }

        let mut missing = Vec::new();
        missing.extend(
            unanswered(
                &psychometric_answers,
                psychometric::QUESTIONS.iter().map(|question| question.id),
            )
            .into_iter()
            .map(|id| (Instrument::Psychometric, id)),
        );
        missing.extend(
            unanswered(
                &technical_answers,
                technical::QUESTIONS.iter().map(|question| question.id),
            )
            .into_iter()
            .map(|id| (Instrument::Technical, id)),
        );
        missing.extend(
            unanswered(
                &wiscar_answers,
                wiscar::QUESTIONS.iter().map(|question| question.id),
            )
            .into_iter()
            .map(|id| (Instrument::Wiscar, id)),
        );
        tracing::debug!(
            psychometric = psychometric_answers.len(),
            technical = technical_answers.len(),
            wiscar = wiscar_answers.len(),
            "answer sheet collected"
        );
        for (instrument, id) in &missing {
            tracing::warn!(instrument = instrument.key(), id, "question left unanswered");
        }

        Ok(CollectedAnswers {
            psychometric: psychometric_answers,
            technical: technical_answers,
            wiscar: wiscar_answers,
            unanswered: missing,
        })
    }
}
