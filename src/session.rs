//! Questionnaire progress as an immutable value. Every transition consumes
//! the current [`Session`] and returns the next one, so a caller can only
//! hold one consistent view of where the respondent is.

use crate::answers::{
    record_psychometric, record_technical, record_wiscar, PsychometricAnswers, TechnicalAnswers,
    WiscarAnswers,
};
use crate::bank::{self, Instrument, Prompt};
use crate::error::{AssessError, Result};
use crate::recommend::recommend_with;
use crate::score::{score_psychometric, score_technical, score_wiscar};
use crate::types::config::RecommendationThresholds;
use crate::types::report::FinalResult;
use crate::types::scoring::{PsychometricResult, TechnicalResult, WiscarResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Intro,
    Psychometric(usize),
    Technical(usize),
    Wiscar(usize),
    Results,
}

impl Step {
    pub const COUNT: usize = 5;

    pub fn instrument(self) -> Option<(Instrument, usize)> {
        match self {
            Self::Psychometric(index) => Some((Instrument::Psychometric, index)),
            Self::Technical(index) => Some((Instrument::Technical, index)),
            Self::Wiscar(index) => Some((Instrument::Wiscar, index)),
            Self::Intro | Self::Results => None,
        }
    }

    /// One-based position among the five steps.
    pub fn number(self) -> usize {
        match self {
            Self::Intro => 1,
            Self::Psychometric(_) => 2,
            Self::Technical(_) => 3,
            Self::Wiscar(_) => 4,
            Self::Results => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Intro => "Introduction",
            Self::Psychometric(_) => "Psychometric Evaluation",
            Self::Technical(_) => "Technical Assessment",
            Self::Wiscar(_) => "WISCAR Analysis",
            Self::Results => "Results & Guidance",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Intro => "Overview and preparation",
            Self::Psychometric(_) => "Personality and motivation assessment",
            Self::Technical(_) => "Skills and aptitude evaluation",
            Self::Wiscar(_) => "Multi-dimensional readiness framework",
            Self::Results => "Personalized recommendations",
        }
    }

    fn start_of(instrument: Instrument) -> Self {
        match instrument {
            Instrument::Psychometric => Self::Psychometric(0),
            Instrument::Technical => Self::Technical(0),
            Instrument::Wiscar => Self::Wiscar(0),
        }
    }

    fn at(self, index: usize) -> Self {
        match self {
            Self::Psychometric(_) => Self::Psychometric(index),
            Self::Technical(_) => Self::Technical(index),
            Self::Wiscar(_) => Self::Wiscar(index),
            other => other,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    step: Step,
    thresholds: RecommendationThresholds,
    psychometric_answers: PsychometricAnswers,
    technical_answers: TechnicalAnswers,
    wiscar_answers: WiscarAnswers,
    psychometric: Option<PsychometricResult>,
    technical: Option<TechnicalResult>,
    wiscar: Option<WiscarResult>,
}

impl Session {
    pub fn new(thresholds: RecommendationThresholds) -> Self {
        Self {
            step: Step::Intro,
            thresholds,
            psychometric_answers: PsychometricAnswers::new(),
            technical_answers: TechnicalAnswers::new(),
            wiscar_answers: WiscarAnswers::new(),
            psychometric: None,
            technical: None,
            wiscar: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn current_prompt(&self) -> Option<Prompt> {
        self.step
            .instrument()
            .and_then(|(instrument, index)| bank::prompt(instrument, index))
    }

    /// `(question number, question count)` within the active instrument.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.step
            .instrument()
            .map(|(instrument, index)| (index + 1, instrument.len()))
    }

    pub fn is_answered(&self) -> bool {
        match self.current_prompt() {
            Some(prompt) => match self.step {
                Step::Psychometric(_) => self.psychometric_answers.contains(prompt.id),
                Step::Technical(_) => self.technical_answers.contains(prompt.id),
                Step::Wiscar(_) => self.wiscar_answers.contains(prompt.id),
                Step::Intro | Step::Results => false,
            },
            None => false,
        }
    }

    pub fn results(&self) -> Option<(PsychometricResult, TechnicalResult, WiscarResult)> {
        match (self.psychometric, self.technical, self.wiscar) {
            (Some(psychometric), Some(technical), Some(wiscar)) => {
                Some((psychometric, technical, wiscar))
            }
            _ => None,
        }
    }

    /// Computed on demand once all three instruments are scored.
    pub fn final_result(&self) -> Option<FinalResult> {
        if self.step != Step::Results {
            return None;
        }
        self.results().map(|(psychometric, technical, wiscar)| {
            recommend_with(&psychometric, &technical, &wiscar, &self.thresholds)
        })
    }

    pub fn start(self) -> Result<Self> {
        if self.step != Step::Intro {
            return Err(AssessError::InvalidTransition(format!(
                "cannot start from {}",
                self.step.title()
            )));
        }
        Ok(Self {
            step: Step::Psychometric(0),
            ..self
        })
    }

    pub fn answer(mut self, raw: &str) -> Result<Self> {
        let prompt = self.current_prompt().ok_or_else(|| {
            AssessError::InvalidTransition(format!(
                "no question to answer during {}",
                self.step.title()
            ))
        })?;
        match self.step {
            Step::Psychometric(_) => {
                record_psychometric(&mut self.psychometric_answers, prompt.id, raw)?
            }
            Step::Technical(_) => record_technical(&mut self.technical_answers, prompt.id, raw)?,
            Step::Wiscar(_) => record_wiscar(&mut self.wiscar_answers, prompt.id, raw)?,
            Step::Intro | Step::Results => {}
        }
        Ok(self)
    }

    pub fn advance(mut self) -> Result<Self> {
        let (instrument, index) = self.step.instrument().ok_or_else(|| {
            AssessError::InvalidTransition(format!("cannot advance from {}", self.step.title()))
        })?;
        if !self.is_answered() {
            let id = self
                .current_prompt()
                .map(|prompt| prompt.id)
                .unwrap_or_default();
            return Err(AssessError::AnswerRequired(id.to_string()));
        }

        if index + 1 < instrument.len() {
            self.step = self.step.at(index + 1);
            return Ok(self);
        }

        // Last question: score, drop the answers, move on.
        self.step = match instrument {
            Instrument::Psychometric => {
                let answers = std::mem::take(&mut self.psychometric_answers);
                self.psychometric = Some(score_psychometric(&answers));
                Step::Technical(0)
            }
            Instrument::Technical => {
                let answers = std::mem::take(&mut self.technical_answers);
                self.technical = Some(score_technical(&answers));
                Step::Wiscar(0)
            }
            Instrument::Wiscar => {
                let answers = std::mem::take(&mut self.wiscar_answers);
                self.wiscar = Some(score_wiscar(&answers));
                Step::Results
            }
        };
        tracing::debug!(step = self.step.title(), "advanced to next step");
        Ok(self)
    }

    /// Steps back one question. Leaving an instrument from its first
    /// question re-enters the previous one from the start.
    pub fn back(mut self) -> Result<Self> {
        let (instrument, index) = self.step.instrument().ok_or_else(|| {
            AssessError::InvalidTransition(format!("cannot go back from {}", self.step.title()))
        })?;
        if index > 0 {
            self.step = self.step.at(index - 1);
            return Ok(self);
        }

        self.step = match instrument {
            Instrument::Psychometric => {
                self.psychometric_answers = PsychometricAnswers::new();
                Step::Intro
            }
            Instrument::Technical => {
                self.technical_answers = TechnicalAnswers::new();
                self.psychometric_answers = PsychometricAnswers::new();
                self.psychometric = None;
                Step::start_of(Instrument::Psychometric)
            }
            Instrument::Wiscar => {
                self.wiscar_answers = WiscarAnswers::new();
                self.technical_answers = TechnicalAnswers::new();
                self.technical = None;
                Step::start_of(Instrument::Technical)
            }
        };
        Ok(self)
    }

    pub fn restart(self) -> Self {
        Self::new(self.thresholds)
    }
}
