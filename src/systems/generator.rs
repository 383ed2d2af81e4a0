//! Exercise generation: weighted pattern selection and exercise assembly.

use rand_core::RngCore;
use serde::Serialize;

use crate::mechanics::{control, decompose, scoring, stoch};
use crate::systems::patterns::{self, Difficulty, Pattern};
use crate::systems::profile::LearningProfile;
use crate::systems::sdk::Hook;

/// Patterns rated up to this much above the complexity stay eligible.
pub const COMPLEXITY_HEADROOM: f64 = 0.2;
pub const STRENGTH_WEIGHT: f64 = 1.3;
pub const WEAKNESS_WEIGHT: f64 = 0.7;

/// One round's challenge. Derived fields are fixed at construction.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    target: u64,
    min_clicks: u64,
    pattern: Pattern,
    complexity: f64,
    difficulty: Difficulty,
    points_base: u64,
    bonus_multiplier: f64,
    time_limit_secs: u32,
    explanation: String,
}

impl Exercise {
    /// Build an exercise around `target` (a zero target becomes 1).
    /// `complexity` is clamped to [0, 1].
    pub fn new(
        pattern: Pattern,
        target: u64,
        complexity: f64,
        points_base: u64,
        explanation: impl Into<String>,
    ) -> Self {
        let target = target.max(1);
        let complexity = control::unit(complexity);
        let difficulty = Difficulty::from_complexity(complexity);
        let ex = Self {
            target,
            min_clicks: decompose::count(target),
            pattern,
            complexity,
            difficulty,
            points_base,
            bonus_multiplier: scoring::bonus_multiplier(complexity, pattern.tuning().complexity),
            time_limit_secs: difficulty.time_limit_secs(),
            explanation: explanation.into(),
        };
        debug_assert_eq!(ex.min_clicks, decompose::count(ex.target));
        ex
    }

    pub fn target(&self) -> u64 { self.target }
    pub fn min_clicks(&self) -> u64 { self.min_clicks }
    pub fn pattern(&self) -> Pattern { self.pattern }
    pub fn complexity(&self) -> f64 { self.complexity }
    pub fn difficulty(&self) -> Difficulty { self.difficulty }
    pub fn points_base(&self) -> u64 { self.points_base }
    pub fn bonus_multiplier(&self) -> f64 { self.bonus_multiplier }
    pub fn time_limit_secs(&self) -> u32 { self.time_limit_secs }
    pub fn explanation(&self) -> &str { &self.explanation }
}

/// Patterns whose rating is within reach of `complexity`, in table order.
pub fn candidates(complexity: f64) -> Vec<Pattern> {
    Pattern::SELECTABLE
        .into_iter()
        .filter(|p| p.tuning().complexity <= complexity + COMPLEXITY_HEADROOM)
        .collect()
}

/// Base weight adjusted by the learner's strengths and weaknesses.
pub fn profile_weight(pattern: Pattern, profile: &LearningProfile) -> f64 {
    let mut w = pattern.tuning().weight;
    if profile.is_strength(pattern) {
        w *= STRENGTH_WEIGHT;
    }
    if profile.is_weakness(pattern) {
        w *= WEAKNESS_WEIGHT;
    }
    w
}

/// Draw a pattern for `complexity`. Hooks scale each candidate's weight
/// multiplicatively; with nothing left to draw, falls back to `Dynamic`.
pub fn select_pattern<Out, R: RngCore + ?Sized>(
    complexity: f64,
    profile: &LearningProfile,
    hooks: &mut [Box<dyn Hook<Out>>],
    rng: &mut R,
) -> Pattern {
    let pool = candidates(complexity);
    let weights: Vec<f64> = pool
        .iter()
        .map(|&p| {
            let base = profile_weight(p, profile);
            hooks
                .iter_mut()
                .fold(base, |w, h| w * h.pattern_weight(p, base).max(0.0))
        })
        .collect();
    match stoch::roulette(rng, &weights) {
        Some(i) => pool[i],
        None => Pattern::Dynamic,
    }
}

/// Build an exercise of a given pattern.
pub fn build<R: RngCore + ?Sized>(pattern: Pattern, complexity: f64, rng: &mut R) -> Exercise {
    let c = control::unit(complexity);
    let built = patterns::build_target(pattern, c, rng);
    Exercise::new(pattern, built.target, c, pattern.points_base(c), built.explanation)
}

/// Select a pattern and build an exercise for it.
pub fn generate<Out, R: RngCore + ?Sized>(
    complexity: f64,
    profile: &LearningProfile,
    hooks: &mut [Box<dyn Hook<Out>>],
    rng: &mut R,
) -> Exercise {
    let c = control::unit(complexity);
    let pattern = select_pattern(c, profile, hooks, rng);
    let ex = build(pattern, c, rng);
    tracing::debug!(
        pattern = %ex.pattern,
        target = ex.target,
        min_clicks = ex.min_clicks,
        complexity = c,
        "generated exercise"
    );
    ex
}
