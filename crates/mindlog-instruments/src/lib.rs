//! mindlog-instruments
//!
//! Self-report questionnaire definitions. Pure data, no I/O.
//! Defines the items, response scale, severity thresholds and scoring
//! rules for each supported instrument.

pub mod crisis;
pub mod error;
pub mod history;
pub mod instruments;
pub mod scoring;

use std::collections::{BTreeMap, HashSet};

use mindlog_core::models::assessment::{Answer, InstrumentKind};

use error::InstrumentError;
use scoring::{
    AnswerError, AnswerProblem, Question, ResponseOption, ScoreRange, ScoredSubmission,
    SeverityThreshold,
};

/// Trait implemented by each questionnaire.
pub trait Instrument: Send + Sync {
    /// Numeric id used by clients and stored on results (e.g. 1 for PHQ-9).
    fn test_id(&self) -> u32;

    /// Stable slug (e.g. "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "PHQ-9 Depression Screening").
    fn name(&self) -> &str;

    fn kind(&self) -> InstrumentKind;

    fn description(&self) -> &str;

    fn questions(&self) -> &[Question];

    fn response_options(&self) -> &[ResponseOption];

    /// Non-overlapping, ascending severity bands covering `0..=max_score`.
    fn thresholds(&self) -> &[SeverityThreshold];

    /// Valid per-item answer range, from the response scale.
    fn answer_range(&self) -> ScoreRange {
        let values = self.response_options().iter().map(|o| o.value);
        ScoreRange {
            min: values.clone().min().unwrap_or(0),
            max: values.max().unwrap_or(0),
        }
    }

    fn max_score(&self) -> u32 {
        self.answer_range().max * self.questions().len() as u32
    }

    /// Check that every item is answered exactly once within range.
    fn validate_answers(&self, answers: &[Answer]) -> Vec<AnswerError> {
        let range = self.answer_range();
        let mut seen = HashSet::new();
        let mut errors = Vec::new();

        for answer in answers {
            let n = answer.question_number;
            if !self.questions().iter().any(|q| q.number == n) {
                errors.push(AnswerError {
                    question_number: n,
                    problem: AnswerProblem::UnknownQuestion,
                    message: format!("{}: question {n} does not exist", self.name()),
                });
                continue;
            }
            if !seen.insert(n) {
                errors.push(AnswerError {
                    question_number: n,
                    problem: AnswerProblem::Duplicate,
                    message: format!("{}: question {n} answered more than once", self.name()),
                });
                continue;
            }
            if !range.contains(answer.value) {
                errors.push(AnswerError {
                    question_number: n,
                    problem: AnswerProblem::OutOfRange,
                    message: format!(
                        "{}: answer {} to question {n} is outside range [{}, {}]",
                        self.name(),
                        answer.value,
                        range.min,
                        range.max,
                    ),
                });
            }
        }

        for question in self.questions() {
            if !seen.contains(&question.number)
                && !errors.iter().any(|e| e.question_number == question.number)
            {
                errors.push(AnswerError {
                    question_number: question.number,
                    problem: AnswerProblem::Missing,
                    message: format!("{}: question {} is unanswered", self.name(), question.number),
                });
            }
        }
        errors
    }

    /// Item score after reverse keying.
    fn item_score(&self, question: &Question, value: u32) -> u32 {
        if question.reverse_scored {
            let range = self.answer_range();
            (range.min + range.max).saturating_sub(value)
        } else {
            value
        }
    }

    fn total_score(&self, answers: &[Answer]) -> u32 {
        answers
            .iter()
            .filter_map(|a| {
                self.questions()
                    .iter()
                    .find(|q| q.number == a.question_number)
                    .map(|q| self.item_score(q, a.value))
            })
            .sum()
    }

    /// Subtotals per facet. Empty for single-scale instruments.
    fn facet_scores(&self, answers: &[Answer]) -> BTreeMap<String, u32> {
        let mut totals = BTreeMap::new();
        for answer in answers {
            if let Some(question) = self.questions().iter().find(|q| q.number == answer.question_number)
                && let Some(facet) = &question.facet
            {
                *totals.entry(facet.clone()).or_insert(0) += self.item_score(question, answer.value);
            }
        }
        totals
    }

    fn interpret(&self, total_score: u32) -> Option<&SeverityThreshold> {
        self.thresholds().iter().find(|t| t.range.contains(total_score))
    }

    /// Whether the answers contain a clinically meaningful risk marker.
    fn crisis_indicator(&self, _answers: &[Answer]) -> bool {
        false
    }
}

/// Return all registered instruments, ordered by test id.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::big_five::BigFive),
        Box::new(instruments::pss10::Pss10),
    ]
}

/// Look up an instrument by slug.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Look up an instrument by numeric test id.
pub fn get_instrument_by_test_id(test_id: u32) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.test_id() == test_id)
}

/// Validate, total and interpret a submission.
pub fn score_submission(
    instrument: &dyn Instrument,
    answers: &[Answer],
) -> Result<ScoredSubmission, InstrumentError> {
    let errors = instrument.validate_answers(answers);
    if !errors.is_empty() {
        return Err(InstrumentError::InvalidAnswers(errors));
    }

    let total_score = instrument.total_score(answers);
    let threshold = instrument
        .interpret(total_score)
        .ok_or_else(|| InstrumentError::Uninterpretable {
            instrument_id: instrument.id().to_string(),
            total_score,
        })?;

    Ok(ScoredSubmission {
        test_id: instrument.test_id(),
        total_score,
        max_score: instrument.max_score(),
        severity_level: threshold.severity_level.clone(),
        description: threshold.description.clone(),
        recommendations: threshold.recommendations.clone(),
        has_crisis_indicators: instrument.crisis_indicator(answers),
        facet_scores: instrument.facet_scores(answers),
    })
}

/// Build the shared item list from plain text, numbering from 1.
pub(crate) fn numbered_questions(items: &[&str]) -> Vec<Question> {
    items
        .iter()
        .enumerate()
        .map(|(i, text)| Question {
            number: i as u32 + 1,
            text: text.to_string(),
            reverse_scored: false,
            facet: None,
        })
        .collect()
}

pub(crate) fn response_scale(options: &[(&str, u32)]) -> Vec<ResponseOption> {
    options
        .iter()
        .map(|(label, value)| ResponseOption {
            label: label.to_string(),
            value: *value,
        })
        .collect()
}

pub(crate) fn threshold(
    min: u32,
    max: u32,
    severity_level: &str,
    description: &str,
    recommendations: &[&str],
) -> SeverityThreshold {
    SeverityThreshold {
        range: ScoreRange { min, max },
        severity_level: severity_level.to_string(),
        description: description.to_string(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}
