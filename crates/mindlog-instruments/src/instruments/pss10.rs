use std::sync::LazyLock;

use mindlog_core::models::assessment::InstrumentKind;

use crate::scoring::{Question, ResponseOption, SeverityThreshold};
use crate::{Instrument, numbered_questions, response_scale, threshold};

/// Positively worded items, scored in reverse.
const REVERSED: [u32; 4] = [4, 5, 7, 8];

/// PSS-10: Perceived Stress Scale.
/// 10 items rated 0–4 over the last month. Total 0–40.
pub struct Pss10;

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    let mut questions = numbered_questions(&[
        "In the last month, how often have you been upset because of something that happened unexpectedly?",
        "In the last month, how often have you felt that you were unable to control the important things in your life?",
        "In the last month, how often have you felt nervous and stressed?",
        "In the last month, how often have you felt confident about your ability to handle your personal problems?",
        "In the last month, how often have you felt that things were going your way?",
        "In the last month, how often have you found that you could not cope with all the things that you had to do?",
        "In the last month, how often have you been able to control irritations in your life?",
        "In the last month, how often have you felt that you were on top of things?",
        "In the last month, how often have you been angered because of things that were outside of your control?",
        "In the last month, how often have you felt difficulties were piling up so high that you could not overcome them?",
    ]);
    for q in &mut questions {
        q.reverse_scored = REVERSED.contains(&q.number);
    }
    questions
});

static OPTIONS: LazyLock<Vec<ResponseOption>> = LazyLock::new(|| {
    response_scale(&[
        ("Never", 0),
        ("Almost Never", 1),
        ("Sometimes", 2),
        ("Fairly Often", 3),
        ("Very Often", 4),
    ])
});

static THRESHOLDS: LazyLock<Vec<SeverityThreshold>> = LazyLock::new(|| {
    vec![
        threshold(0, 13, "low", "Low perceived stress", &[
            "Your stress levels appear to be well-managed",
            "Continue your current stress management strategies",
            "Maintain healthy lifestyle habits and self-care routines",
            "Stay aware of potential stressors and address them early",
            "Regular check-ins can help maintain low stress levels",
        ]),
        threshold(14, 26, "moderate", "Moderate perceived stress", &[
            "Consider implementing regular stress-reduction techniques",
            "Practice mindfulness, meditation, or deep breathing exercises",
            "Ensure adequate sleep, nutrition, and physical activity",
            "Identify your main stressors and develop coping strategies",
            "Talk to friends, family, or a counselor about your stress",
            "Set boundaries and learn to say no when necessary",
        ]),
        threshold(27, 40, "high", "High perceived stress", &[
            "We strongly recommend seeking professional support",
            "Chronic high stress can impact physical and mental health",
            "Practice daily stress-reduction techniques",
            "Identify and address major sources of stress in your life",
            "Build a strong support network of friends and family",
            "Prioritize self-care and set firm boundaries",
        ]),
    ]
});

impl Instrument for Pss10 {
    fn test_id(&self) -> u32 {
        4
    }

    fn id(&self) -> &str {
        "pss10"
    }

    fn name(&self) -> &str {
        "Perceived Stress Scale (PSS-10)"
    }

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Stress
    }

    fn description(&self) -> &str {
        "The Perceived Stress Scale (PSS-10) measures the perception of stress. \
         In the last month, how often have you experienced the following?"
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
