//! Hint composition.
//!
//! A hint is a strategy tag drawn uniformly, the strategy's generic advice,
//! a concrete next-step suggestion when the player is still short of the
//! target, an optional tip for the exercise's pattern, and a remark on the
//! shape of the target's digits.

use std::fmt;

use rand_core::RngCore;
use serde::Serialize;

use crate::mechanics::{decompose, stoch};
use crate::systems::generator::Exercise;
use crate::systems::patterns::Pattern;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Decomposition,
    PatternRecognition,
    Optimization,
    MathematicalInsight,
    WorkingBackwards,
    PlaceValue,
    Shortcuts,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::Decomposition,
        Strategy::PatternRecognition,
        Strategy::Optimization,
        Strategy::MathematicalInsight,
        Strategy::WorkingBackwards,
        Strategy::PlaceValue,
        Strategy::Shortcuts,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Strategy::Decomposition => "decomposition",
            Strategy::PatternRecognition => "pattern_recognition",
            Strategy::Optimization => "optimization",
            Strategy::MathematicalInsight => "mathematical_insight",
            Strategy::WorkingBackwards => "working_backwards",
            Strategy::PlaceValue => "place_value",
            Strategy::Shortcuts => "shortcuts",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Strategy::Decomposition => "Break the number into smaller, manageable parts",
            Strategy::PatternRecognition => "Look for patterns or sequences in the target number",
            Strategy::Optimization => "Consider the most efficient path using the fewest clicks",
            Strategy::MathematicalInsight => "Think about the mathematical properties of this number",
            Strategy::WorkingBackwards => "Start from the target and work backwards to find the path",
            Strategy::PlaceValue => "Consider the place values and build from largest to smallest",
            Strategy::Shortcuts => "Look for mathematical shortcuts or elegant solutions",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    #[serde(rename = "strategyTag")]
    pub strategy: Strategy,
    /// Still to add; zero once the total has reached or passed the target.
    pub remaining: u64,
    pub suggestion: Vec<decompose::PathStep>,
    pub text: String,
}

/// Static tip per pattern. Only powers of ten has one so far.
pub fn pattern_tip(pattern: Pattern) -> Option<&'static str> {
    match pattern {
        Pattern::PowersOfTen => Some(
            "Powers of 10 tip: This number is built from 1s and 0s multiplied by powers of 10.",
        ),
        _ => None,
    }
}

/// Remark on the target's decimal digits.
pub fn target_observation(target: u64) -> String {
    let digits = target.to_string();
    if digits.chars().eq(digits.chars().rev()) {
        "This is a palindrome!".to_string()
    } else if digits.contains("111") {
        "Notice the repeated digits!".to_string()
    } else if digits.ends_with("000") {
        "This is a round number - think thousands!".to_string()
    } else {
        format!("Look for mathematical patterns in {target}.")
    }
}

/// Hint with a randomly drawn strategy.
pub fn hint<R: RngCore + ?Sized>(exercise: &Exercise, current_total: u64, rng: &mut R) -> Hint {
    let strategy = Strategy::ALL[stoch::pick(rng, Strategy::ALL.len())];
    hint_with(strategy, exercise, current_total)
}

/// Hint for a fixed strategy.
pub fn hint_with(strategy: Strategy, exercise: &Exercise, current_total: u64) -> Hint {
    let target = exercise.target();
    let remaining = target.saturating_sub(current_total);
    let suggestion = decompose::suggest_path(remaining);

    let mut text = strategy.advice().to_string();
    if remaining > 0 {
        let path = decompose::format_path(&suggestion);
        text.push_str(&format!("\n\nSpecific hint: You need {remaining} more. "));
        match strategy {
            Strategy::Decomposition => {
                text.push_str(&format!("Try breaking {remaining} into: {path}"));
            }
            Strategy::WorkingBackwards => {
                text.push_str(&format!(
                    "Working backwards: {target} - {current_total} = {remaining}"
                ));
            }
            _ => text.push_str(&format!("Consider using: {path}")),
        }
    }
    if let Some(tip) = pattern_tip(exercise.pattern()) {
        text.push('\n');
        text.push_str(tip);
    }
    text.push('\n');
    text.push_str(&target_observation(target));

    Hint { strategy, remaining, suggestion, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(pattern: Pattern, target: u64) -> Exercise {
        Exercise::new(pattern, target, 0.5, 100, "")
    }

    #[test]
    fn digit_shapes() {
        assert_eq!(target_observation(12321), "This is a palindrome!");
        assert_eq!(target_observation(7), "This is a palindrome!");
        assert_eq!(target_observation(31114), "Notice the repeated digits!");
        assert_eq!(target_observation(42_000), "This is a round number - think thousands!");
        assert_eq!(target_observation(1234), "Look for mathematical patterns in 1234.");
    }

    #[test]
    fn decomposition_spells_out_the_path() {
        let h = hint_with(Strategy::Decomposition, &exercise(Pattern::Palindromes, 1221), 200);
        assert_eq!(h.remaining, 1021);
        assert!(h.text.contains("Try breaking 1021 into: 1×(+1000) + 2×(+10) + 1×(+1)"));
        assert!(h.text.ends_with("This is a palindrome!"));
        assert!(!h.text.contains("Powers of 10 tip"));
    }

    #[test]
    fn working_backwards_shows_the_subtraction() {
        let h = hint_with(Strategy::WorkingBackwards, &exercise(Pattern::PrimeSums, 530), 30);
        assert!(h.text.contains("Working backwards: 530 - 30 = 500"));
        assert_eq!(h.suggestion.len(), 1);
    }

    #[test]
    fn powers_of_ten_gets_its_tip() {
        let h = hint_with(Strategy::Shortcuts, &exercise(Pattern::PowersOfTen, 1_100_000), 0);
        assert!(h.text.contains("Consider using: 1×(+1000000) + 1×(+100000)"));
        assert!(h.text.contains("Powers of 10 tip"));
    }

    #[test]
    fn nothing_specific_once_at_or_past_target() {
        let h = hint_with(Strategy::Optimization, &exercise(Pattern::FibonacciLike, 50), 100);
        assert_eq!(h.remaining, 0);
        assert!(h.suggestion.is_empty());
        assert!(!h.text.contains("Specific hint"));
        assert!(h.text.starts_with(Strategy::Optimization.advice()));
    }
}
