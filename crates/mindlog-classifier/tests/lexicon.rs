use mindlog_classifier::error::ClassifierError;
use mindlog_classifier::lexicon::LexiconClassifier;
use mindlog_classifier::{ClassificationSource, SentimentClassifier, normalize_scores};
use mindlog_core::models::sentiment::{Sentiment, SentimentScores};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn positive_words_win() {
    let c = LexiconClassifier.classify("Had a great day, really happy!").unwrap();
    assert_eq!(c.sentiment, Sentiment::Positive);
    assert!(close(c.confidence, 0.8));
    assert!(close(c.scores.positive, 0.8));
    assert!(close(c.scores.neutral, 0.15));
    assert!(close(c.scores.negative, 0.05));
    assert_eq!(
        c.source,
        ClassificationSource::Model {
            name: "lexicon".to_string()
        }
    );
}

#[test]
fn negative_words_win() {
    let c = LexiconClassifier
        .classify("Stressed and anxious, a terrible week")
        .unwrap();
    assert_eq!(c.sentiment, Sentiment::Negative);
    assert!(close(c.confidence, 0.9));
    assert_eq!(c.scores.dominant(), Sentiment::Negative);
}

#[test]
fn balanced_or_plain_text_is_neutral() {
    let c = LexiconClassifier.classify("Went to the shop.").unwrap();
    assert_eq!(c.sentiment, Sentiment::Neutral);
    assert!(close(c.confidence, 0.6));
    assert!(close(c.scores.positive, c.scores.negative));

    let mixed = LexiconClassifier.classify("good morning, bad evening").unwrap();
    assert_eq!(mixed.sentiment, Sentiment::Neutral);
}

#[test]
fn confidence_is_capped() {
    let text = "happy happy happy happy happy happy happy happy";
    let c = LexiconClassifier.classify(text).unwrap();
    assert!(close(c.confidence, 0.95));
    let sum = c.scores.positive + c.scores.neutral + c.scores.negative;
    assert!(close(sum, 1.0));
}

#[test]
fn matches_whole_words_only() {
    // "badge" and "goodbye" contain keywords but are not keywords
    assert_eq!(LexiconClassifier::count_hits("badge goodbye"), (0, 0));
    assert_eq!(LexiconClassifier::count_hits("GOOD. Bad?"), (1, 1));
}

#[test]
fn empty_text_is_rejected() {
    assert!(matches!(
        LexiconClassifier.classify("   "),
        Err(ClassifierError::EmptyText)
    ));
}

#[test]
fn same_text_same_answer() {
    let a = LexiconClassifier.classify("calm but tired").unwrap();
    let b = LexiconClassifier.classify("calm but tired").unwrap();
    assert_eq!(a, b);
}

#[test]
fn normalize_rescales_small_drift() {
    let scores = normalize_scores(SentimentScores {
        positive: 0.51,
        neutral: 0.3,
        negative: 0.2,
    })
    .unwrap();
    let sum = scores.positive + scores.neutral + scores.negative;
    assert!(close(sum, 1.0));
    assert!(scores.positive > 0.5);
}

#[test]
fn normalize_rejects_bad_distributions() {
    let far_off = SentimentScores {
        positive: 0.9,
        neutral: 0.9,
        negative: 0.0,
    };
    assert!(matches!(
        normalize_scores(far_off),
        Err(ClassifierError::ResponseParse(_))
    ));

    let negative_value = SentimentScores {
        positive: 1.1,
        neutral: 0.0,
        negative: -0.1,
    };
    assert!(normalize_scores(negative_value).is_err());

    let nan = SentimentScores {
        positive: f64::NAN,
        neutral: 0.5,
        negative: 0.5,
    };
    assert!(normalize_scores(nan).is_err());
}
