use std::sync::LazyLock;

use mindlog_core::models::assessment::{Answer, InstrumentKind};

use crate::scoring::{Question, ResponseOption, SeverityThreshold};
use crate::{Instrument, numbered_questions, response_scale, threshold};

/// Item asking about thoughts of self-harm. Any non-zero answer is a crisis
/// indicator.
pub const SELF_HARM_QUESTION: u32 = 9;

/// PHQ-9: Patient Health Questionnaire, depression screen.
/// 9 items rated 0–3 over the past two weeks. Total 0–27.
pub struct Phq9;

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    numbered_questions(&[
        "Little interest or pleasure in doing things",
        "Feeling down, depressed, or hopeless",
        "Trouble falling or staying asleep, or sleeping too much",
        "Feeling tired or having little energy",
        "Poor appetite or overeating",
        "Feeling bad about yourself - or that you are a failure or have let yourself or your family down",
        "Trouble concentrating on things, such as reading the newspaper or watching television",
        "Moving or speaking so slowly that other people could have noticed. Or the opposite - being so fidgety or restless that you have been moving around a lot more than usual",
        "Thoughts that you would be better off dead, or of hurting yourself",
    ])
});

static OPTIONS: LazyLock<Vec<ResponseOption>> = LazyLock::new(|| {
    response_scale(&[
        ("Not at all", 0),
        ("Several days", 1),
        ("More than half the days", 2),
        ("Nearly every day", 3),
    ])
});

static THRESHOLDS: LazyLock<Vec<SeverityThreshold>> = LazyLock::new(|| {
    vec![
        threshold(0, 4, "minimal", "Minimal or no depression", &[
            "Continue with regular self-care activities",
            "Keep journaling to track your mood",
            "Maintain healthy sleep and exercise habits",
            "Consider retaking this assessment in 2 weeks",
        ]),
        threshold(5, 9, "mild", "Mild depression", &[
            "Monitor your symptoms closely",
            "Engage in regular physical activity",
            "Practice stress-reduction techniques",
            "Talk to friends or family about how you feel",
            "Consider professional support if symptoms persist",
        ]),
        threshold(10, 14, "moderate", "Moderate depression", &[
            "We recommend speaking with a mental health professional",
            "Consider therapy or counseling",
            "Maintain regular routines and social connections",
            "Continue journaling and tracking your mood",
            "Avoid isolation - stay connected with supportive people",
        ]),
        threshold(15, 19, "moderately_severe", "Moderately severe depression", &[
            "Please consult with a mental health professional soon",
            "Professional treatment is strongly recommended",
            "Therapy and/or medication may be beneficial",
            "Reach out to your support network",
            "Contact a crisis hotline if you need immediate support",
        ]),
        threshold(20, 27, "severe", "Severe depression", &[
            "Please seek professional help immediately",
            "Contact a mental health provider today",
            "Consider visiting an emergency room if in crisis",
            "Call 988 Suicide & Crisis Lifeline",
            "You deserve support - please reach out for help",
        ]),
    ]
});

impl Instrument for Phq9 {
    fn test_id(&self) -> u32 {
        1
    }

    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9 Depression Screening"
    }

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Depression
    }

    fn description(&self) -> &str {
        "The Patient Health Questionnaire-9 (PHQ-9) is a brief screening tool for depression. \
         Over the past 2 weeks, how often have you been bothered by the following problems?"
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }

    fn response_options(&self) -> &[ResponseOption] {
        &OPTIONS
    }

    fn thresholds(&self) -> &[SeverityThreshold] {
        &THRESHOLDS
    }

    fn crisis_indicator(&self, answers: &[Answer]) -> bool {
        answers
            .iter()
            .any(|a| a.question_number == SELF_HARM_QUESTION && a.value > 0)
    }
}
