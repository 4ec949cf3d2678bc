use thiserror::Error;

use crate::scoring::AnswerError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("invalid answers: {}", format_answer_errors(.0))]
    InvalidAnswers(Vec<AnswerError>),

    #[error("{instrument_id}: no severity threshold covers total score {total_score}")]
    Uninterpretable {
        instrument_id: String,
        total_score: u32,
    },
}

fn format_answer_errors(errors: &[AnswerError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
