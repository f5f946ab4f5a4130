//! Fixed question banks for the three instruments, plus a uniform prompt
//! view used by the listing command and the interactive session.

pub mod psychometric;
pub mod technical;
pub mod wiscar;

use crate::types::question::{ChoiceFormat, WiscarKind, LIKERT_LABELS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instrument {
    Psychometric,
    Technical,
    Wiscar,
}

impl Instrument {
    pub const ALL: [Self; 3] = [Self::Psychometric, Self::Technical, Self::Wiscar];

    pub fn key(self) -> &'static str {
        match self {
            Self::Psychometric => "psychometric",
            Self::Technical => "technical",
            Self::Wiscar => "wiscar",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychometric Evaluation",
            Self::Technical => "Technical Assessment",
            Self::Wiscar => "WISCAR Analysis",
        }
    }

    pub fn len(self) -> usize {
        match self {
            Self::Psychometric => psychometric::QUESTIONS.len(),
            Self::Technical => technical::QUESTIONS.len(),
            Self::Wiscar => wiscar::QUESTIONS.len(),
        }
    }

    pub fn prompts(self) -> Vec<Prompt> {
        (0..self.len()).filter_map(|index| prompt(self, index)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOption {
    pub key: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub id: &'static str,
    pub text: &'static str,
    pub section: &'static str,
    pub options: Vec<PromptOption>,
}

fn likert_options() -> Vec<PromptOption> {
    LIKERT_LABELS
        .iter()
        .map(|&(value, label)| PromptOption {
            key: value.to_string(),
            label,
        })
        .collect()
}

/// Presentation view of the question at `index`, if the instrument has one.
pub fn prompt(instrument: Instrument, index: usize) -> Option<Prompt> {
    match instrument {
        Instrument::Psychometric => psychometric::QUESTIONS.get(index).map(|question| Prompt {
            id: question.id,
            text: question.text,
            section: question.category.label(),
            options: likert_options(),
        }),
        Instrument::Technical => technical::QUESTIONS.get(index).map(|question| Prompt {
            id: question.id,
            text: question.text,
            section: match question.format {
                ChoiceFormat::MultipleChoice => question.category.label(),
                ChoiceFormat::Scenario => "Scenario",
            },
            options: question
                .options
                .iter()
                .map(|option| PromptOption {
                    key: option.key.to_string(),
                    label: option.label,
                })
                .collect(),
        }),
        Instrument::Wiscar => wiscar::QUESTIONS.get(index).map(|question| Prompt {
            id: question.id,
            text: question.text,
            section: question.category.label(),
            options: match question.kind {
                WiscarKind::Likert => likert_options(),
                WiscarKind::Weighted(choices) => choices
                    .iter()
                    .map(|choice| PromptOption {
                        key: choice.key.to_string(),
                        label: choice.label,
                    })
                    .collect(),
            },
        }),
    }
}
