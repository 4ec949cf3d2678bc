use std::sync::LazyLock;

use mindlog_core::models::assessment::InstrumentKind;

use crate::scoring::{Question, ResponseOption, SeverityThreshold};
use crate::{Instrument, response_scale, threshold};

/// Big Five personality inventory (IPIP-50).
/// 50 items rated 1–5, ten per trait. Total 50–250; per-trait subtotals 10–50.
pub struct BigFive;

const EXTRAVERSION: &str = "extraversion";
const AGREEABLENESS: &str = "agreeableness";
const CONSCIENTIOUSNESS: &str = "conscientiousness";
const NEUROTICISM: &str = "neuroticism";
const OPENNESS: &str = "openness";

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    let items: [(&str, &str, bool); 50] = [
        ("I am the life of the party", EXTRAVERSION, false),
        ("I don't talk a lot", EXTRAVERSION, true),
        ("I feel comfortable around people", EXTRAVERSION, false),
        ("I keep in the background", EXTRAVERSION, true),
        ("I start conversations", EXTRAVERSION, false),
        ("I have little to say", EXTRAVERSION, true),
        ("I talk to a lot of different people at parties", EXTRAVERSION, false),
        ("I don't like to draw attention to myself", EXTRAVERSION, true),
        ("I don't mind being the center of attention", EXTRAVERSION, false),
        ("I am quiet around strangers", EXTRAVERSION, true),
        ("I feel little concern for others", AGREEABLENESS, true),
        ("I am interested in people", AGREEABLENESS, false),
        ("I insult people", AGREEABLENESS, true),
        ("I sympathize with others' feelings", AGREEABLENESS, false),
        ("I am not interested in other people's problems", AGREEABLENESS, true),
        ("I have a soft heart", AGREEABLENESS, false),
        ("I am not really interested in others", AGREEABLENESS, true),
        ("I take time out for others", AGREEABLENESS, false),
        ("I feel others' emotions", AGREEABLENESS, false),
        ("I make people feel at ease", AGREEABLENESS, false),
        ("I am always prepared", CONSCIENTIOUSNESS, false),
        ("I leave my belongings around", CONSCIENTIOUSNESS, true),
        ("I pay attention to details", CONSCIENTIOUSNESS, false),
        ("I make a mess of things", CONSCIENTIOUSNESS, true),
        ("I get chores done right away", CONSCIENTIOUSNESS, false),
        ("I often forget to put things back in their proper place", CONSCIENTIOUSNESS, true),
        ("I like order", CONSCIENTIOUSNESS, false),
        ("I shirk my duties", CONSCIENTIOUSNESS, true),
        ("I follow a schedule", CONSCIENTIOUSNESS, false),
        ("I am exacting in my work", CONSCIENTIOUSNESS, false),
        ("I get stressed out easily", NEUROTICISM, false),
        ("I am relaxed most of the time", NEUROTICISM, true),
        ("I worry about things", NEUROTICISM, false),
        ("I seldom feel blue", NEUROTICISM, true),
        ("I am easily disturbed", NEUROTICISM, false),
        ("I get upset easily", NEUROTICISM, false),
        ("I change my mood a lot", NEUROTICISM, false),
        ("I have frequent mood swings", NEUROTICISM, false),
        ("I get irritated easily", NEUROTICISM, false),
        ("I often feel blue", NEUROTICISM, false),
        ("I have a rich vocabulary", OPENNESS, false),
        ("I have difficulty understanding abstract ideas", OPENNESS, true),
        ("I have a vivid imagination", OPENNESS, false),
        ("I am not interested in abstract ideas", OPENNESS, true),
        ("I have excellent ideas", OPENNESS, false),
        ("I do not have a good imagination", OPENNESS, true),
        ("I am quick to understand things", OPENNESS, false),
        ("I use difficult words", OPENNESS, false),
        ("I spend time reflecting on things", OPENNESS, false),
        ("I am full of ideas", OPENNESS, false),
    ];

    items
        .iter()
        .enumerate()
        .map(|(i, (text, facet, reverse_scored))| Question {
            number: i as u32 + 1,
            text: text.to_string(),
            reverse_scored: *reverse_scored,
            facet: Some(facet.to_string()),
        })
        .collect()
});

static OPTIONS: LazyLock<Vec<ResponseOption>> = LazyLock::new(|| {
    response_scale(&[
        ("Very Inaccurate", 1),
        ("Moderately Inaccurate", 2),
        ("Neither Accurate nor Inaccurate", 3),
        ("Moderately Accurate", 4),
        ("Very Accurate", 5),
    ])
});

// Personality bands describe trait expression, not clinical severity.
static THRESHOLDS: LazyLock<Vec<SeverityThreshold>> = LazyLock::new(|| {
    vec![
        threshold(0, 100, "low", "Low overall personality trait expression", &[
            "Your results reflect your unique personality profile",
            "There are no \"good\" or \"bad\" scores - just different traits",
            "Consider how your traits align with your personal and professional goals",
            "Personality can evolve over time with conscious effort",
        ]),
        threshold(101, 150, "moderate_low", "Moderate-low personality trait expression", &[
            "Your personality profile shows balanced trait expression",
            "Consider which traits serve you well and which you might want to develop",
            "Reflect on how your personality impacts your relationships and work",
            "Use your strengths to achieve your goals",
        ]),
        threshold(151, 200, "moderate_high", "Moderate-high personality trait expression", &[
            "Your personality profile shows strong trait expression",
            "Leverage your strengths in personal and professional contexts",
            "Be aware of how your traits affect your interactions",
            "Balance is key - too much of any trait can be challenging",
        ]),
        threshold(201, 250, "high", "High personality trait expression", &[
            "You show strong personality trait expression across dimensions",
            "Use your personality strengths strategically",
            "Be mindful of situations where your traits may need moderation",
            "Continue your journey of self-discovery and growth",
        ]),
    ]
});

impl Instrument for BigFive {
    fn test_id(&self) -> u32 {
        3
    }

    fn id(&self) -> &str {
        "big_five"
    }

    fn name(&self) -> &str {
        "Big Five Personality Test"
    }

    fn kind(&self) -> InstrumentKind {
        InstrumentKind::Personality
    }

    fn description(&self) -> &str {
        "The Big Five personality test measures five major dimensions of personality: \
         Openness, Conscientiousness, Extraversion, Agreeableness, and Neuroticism. \
         Please rate how accurately each statement describes you."
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
