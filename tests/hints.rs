// tests/hints.rs
mod common;

use common::{ScriptedRng, drill};
use sum_challenge::genres::{ManualClock, Session, SessionConfig};
use sum_challenge::systems::generator::Exercise;
use sum_challenge::systems::hint_advisor::{self, Strategy};
use sum_challenge::systems::patterns::Pattern;

fn session_drawing(fraction: f64) -> Session<ScriptedRng, ManualClock> {
    Session::with_parts(
        SessionConfig::default(),
        ScriptedRng::fractions(&[fraction]),
        ManualClock::new(),
    )
}

#[test]
fn strategy_draw_is_uniform_over_seven() {
    let cases = [
        (0.0, Strategy::Decomposition),
        (0.2, Strategy::PatternRecognition),
        (0.5, Strategy::MathematicalInsight),
        (0.99, Strategy::Shortcuts),
    ];
    for (u, expected) in cases {
        let mut rng = ScriptedRng::fractions(&[u]);
        let h = hint_advisor::hint(&drill(10), 0, &mut rng);
        assert_eq!(h.strategy, expected, "draw {u}");
    }
}

#[test]
fn session_hint_tracks_the_running_total() {
    let mut s = session_drawing(0.0);
    s.start_exercise_with(drill(1_100_000));
    s.click(100_000).unwrap();

    let h = s.request_hint().unwrap();
    assert_eq!(h.strategy, Strategy::Decomposition);
    assert_eq!(h.remaining, 1_000_000);
    assert!(h.text.starts_with(Strategy::Decomposition.advice()));
    assert!(h.text.contains("Specific hint: You need 1000000 more. Try breaking 1000000 into: 1×(+1000000)"));
    assert!(h.text.contains("Powers of 10 tip"));
    assert!(h.text.ends_with("This is a round number - think thousands!"));
    // asking for a hint is free
    assert_eq!(s.progress().clicks_used, 1);
    assert!(s.is_active());
}

#[test]
fn working_backwards_after_an_overshoot() {
    let mut s = session_drawing(4.5 / 7.0);
    s.start_exercise_with(Exercise::new(Pattern::Palindromes, 121, 0.3, 60, "palindrome"));
    s.click(1000).unwrap();

    let h = s.request_hint().unwrap();
    assert_eq!(h.strategy, Strategy::WorkingBackwards);
    assert_eq!(h.remaining, 0);
    assert!(h.suggestion.is_empty());
    assert!(!h.text.contains("Specific hint"));
    assert!(!h.text.contains("Powers of 10 tip"));
    assert!(h.text.ends_with("This is a palindrome!"));
}

#[test]
fn every_strategy_phrases_the_remainder() {
    let ex = Exercise::new(Pattern::PrimeSums, 4_321, 0.7, 150, "");
    for strategy in Strategy::ALL {
        let h = hint_advisor::hint_with(strategy, &ex, 21);
        assert_eq!(h.remaining, 4_300);
        assert_eq!(h.suggestion.len(), 2);
        assert!(h.text.contains("You need 4300 more."), "{strategy}");
        assert!(h.text.ends_with("Look for mathematical patterns in 4321."));
    }
}

#[test]
fn hint_serializes_with_a_strategy_tag() {
    let ex = Exercise::new(Pattern::FibonacciLike, 3_111, 0.5, 80, "");
    let h = hint_advisor::hint_with(Strategy::PlaceValue, &ex, 0);
    let v = serde_json::to_value(&h).unwrap();
    assert_eq!(v["strategyTag"], "place_value");
    assert_eq!(v["remaining"], 3_111);
    assert_eq!(v["suggestion"][0]["denomination"], 1_000);
    assert!(v["text"].as_str().is_some_and(|t| t.ends_with("Notice the repeated digits!")));
}
