use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("answer sheet parse error: {0}")]
    SheetParse(String),

    #[error("unknown {instrument} question: {id}")]
    UnknownQuestion { instrument: String, id: String },

    #[error("invalid response for {id}: {reason}")]
    InvalidResponse { id: String, reason: String },

    #[error("an answer is required before advancing past {0}")]
    AnswerRequired(String),

    #[error("invalid session transition: {0}")]
    InvalidTransition(String),

    #[error("input ended before the assessment was complete")]
    IncompleteSession,

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AssessError>;
