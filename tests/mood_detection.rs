//! Black-box scenarios for the mood classifier.

use animind::mood::{detect_mood, score_text, Mood, PRIORITY};

#[test]
fn classifier_is_a_pure_function() {
    let inputs = [
        "awesome!! let's go",
        "this is stupid!",
        "I feel so alone",
        "thanks, that was helpful",
        "why won't this work?",
        "The weather today is cloudy",
    ];
    for text in inputs {
        assert_eq!(detect_mood(text), detect_mood(text));
        assert_eq!(score_text(text), score_text(text));
    }
}

#[test]
fn default_cases_return_neutral() {
    assert_eq!(detect_mood(""), Mood::Neutral);
    assert_eq!(detect_mood("   "), Mood::Neutral);
    assert_eq!(detect_mood("The weather today is cloudy"), Mood::Neutral);
}

#[test]
fn case_insensitive_keyword_matching() {
    assert_eq!(detect_mood("AWESOME"), Mood::Excited);
    assert_eq!(detect_mood("AwEsOmE"), Mood::Excited);
}

#[test]
fn substring_matching_has_no_word_boundaries() {
    // "thanks" inside "Thanksgiving"
    assert_eq!(detect_mood("Thanksgiving"), Mood::Positive);
    // "down" inside "downtown"
    assert_eq!(detect_mood("heading downtown"), Mood::Sad);
}

#[test]
fn exclamation_boost_magnitudes() {
    assert_eq!(score_text("awesome").excited, 1);
    assert_eq!(score_text("awesome!").excited, 2);
    assert_eq!(score_text("awesome!!").excited, 3);
    // Three or more behaves like two.
    assert_eq!(score_text("awesome!!!").excited, 3);
}

#[test]
fn question_penalty_cancels_a_single_match() {
    assert_eq!(detect_mood("awesome?"), Mood::Neutral);
    // Two excited matches survive the penalty.
    assert_eq!(detect_mood("awesome amazing?"), Mood::Excited);
}

#[test]
fn angry_boost_beats_base_negative_evidence() {
    let scores = score_text("this is stupid!");
    assert_eq!(scores.angry, 2);
    assert_eq!(detect_mood("this is stupid!"), Mood::Angry);

    // Negative evidence alone also feeds the angry boost.
    let scores = score_text("bad!");
    assert_eq!(scores.negative, 1);
    assert_eq!(scores.angry, 1);
    assert_eq!(detect_mood("bad!"), Mood::Angry);
}

#[test]
fn tie_break_follows_fixed_priority() {
    assert_eq!(detect_mood("amazing lonely"), Mood::Excited);

    // Every adjacent pair in the priority order.
    let one_keyword_each = [
        (Mood::Excited, "amazing"),
        (Mood::Angry, "furious"),
        (Mood::Sad, "lonely"),
        (Mood::Positive, "glad"),
        (Mood::Negative, "confusing"),
    ];
    for (i, (higher, hk)) in one_keyword_each.iter().enumerate() {
        for (lower, lk) in &one_keyword_each[i + 1..] {
            let text = format!("{hk} {lk}");
            assert_eq!(
                detect_mood(&text),
                *higher,
                "{higher} should beat {lower} on tie ({text:?})"
            );
        }
    }
}

#[test]
fn winning_score_is_never_negative() {
    let adversarial = [
        "?", "!?", "awesome?", "awesome??", "great? hard", "hype? trash?",
        "perfect!? lonely", "yes? no? maybe?",
    ];
    for text in adversarial {
        let scores = score_text(text);
        let mood = detect_mood(text);
        assert!(scores.get(mood) >= 0, "{text:?} -> {mood}");
    }
}

#[test]
fn neutral_only_when_no_positive_evidence_survives() {
    for text in ["awesome?", "hello there", ""] {
        if detect_mood(text) == Mood::Neutral {
            let scores = score_text(text);
            assert!(PRIORITY.iter().all(|m| scores.get(*m) <= 0), "{text:?}");
        }
    }
}

#[test]
fn arbitrary_unicode_is_safe() {
    assert_eq!(detect_mood("日本語のメッセージ"), Mood::Neutral);
    // Keyword inside mixed-script text still matches.
    assert_eq!(detect_mood("それは awesome です"), Mood::Excited);
}
