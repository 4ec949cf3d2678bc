use std::sync::LazyLock;

use mindlog_core::models::assessment::InstrumentKind;

use crate::scoring::{Question, ResponseOption, SeverityThreshold};
use crate::{Instrument, numbered_questions, response_scale, threshold};

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items rated 0–3 over the past two weeks. Total 0–21.
pub struct Gad7;

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    numbered_questions(&[
        "Feeling nervous, anxious, or on edge",
        "Not being able to stop or control worrying",
        "Worrying too much about different things",
        "Trouble relaxing",
        "Being so restless that it's hard to sit still",
        "Becoming easily annoyed or irritable",
        "Feeling afraid as if something awful might happen",
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
        threshold(0, 4, "minimal", "Minimal anxiety", &[
            "Your anxiety levels appear to be minimal",
            "Continue with regular self-care activities",
            "Practice mindfulness and stress management",
            "Maintain healthy lifestyle habits",
            "Consider retaking this assessment in 2 weeks",
        ]),
        threshold(5, 9, "mild", "Mild anxiety", &[
            "Monitor your symptoms and triggers",
            "Practice relaxation techniques like deep breathing",
            "Engage in regular physical activity",
            "Limit caffeine and alcohol intake",
            "Consider mindfulness or meditation apps",
            "Talk to friends or family about your concerns",
        ]),
        threshold(10, 14, "moderate", "Moderate anxiety", &[
            "We recommend speaking with a mental health professional",
            "Consider cognitive behavioral therapy (CBT)",
            "Practice daily relaxation exercises",
            "Maintain regular sleep and eating schedules",
            "Limit exposure to anxiety triggers when possible",
            "Join a support group for anxiety management",
        ]),
        threshold(15, 21, "severe", "Severe anxiety", &[
            "Please consult with a mental health professional soon",
            "Professional treatment is strongly recommended",
            "Therapy and/or medication may be very helpful",
            "Practice grounding techniques during anxiety episodes",
            "Reach out to your support network",
            "Contact a crisis hotline if you need immediate support",
            "Consider visiting urgent care if anxiety is overwhelming",
        ]),
    ]
});

impl Instrument for Gad7 {
    fn test_id(&self) -> u32 {
        2
    }

    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7 Anxiety Screening"
    }

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Anxiety
    }

    fn description(&self) -> &str {
        "The Generalized Anxiety Disorder-7 (GAD-7) is a brief screening tool for anxiety. \
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
}
