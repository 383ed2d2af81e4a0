// src/systems/sdk.rs

//! # Systems SDK
//!
//! Hook protocol shared by the **systems** (self-contained pieces of the
//! exercise loop: pattern generation, learning profile, achievements, hints)
//! and the genres that orchestrate them.
//!
//! ## What a system is
//! A system owns one concern and exposes plain functions or small owned
//! types. It never touches a display and never reaches for ambient state:
//! randomness comes in as `&mut impl RngCore`, time comes in as numbers.
//! - **patterns**: target construction rules + static pattern metadata
//! - **generator**: weighted pattern selection, `Exercise` assembly
//! - **profile**: attempt history → strengths/weaknesses
//! - **achievements**: predicate catalogue, unlock book
//! - **hint_advisor**: strategy-tagged hints (feature `system-hint_advisor`)
//!
//! Systems stay **genre-neutral**: a different front end can reuse the
//! generator or the achievement book without the calculator session.
//!
//! ## Hooks
//! Implement [`Hook`] to take part in a session without editing it:
//!
//! - `pattern_weight(pattern, base_weight) -> f64`
//!   Multiply a pattern's roulette weight (default 1.0). Multipliers from
//!   several hooks compose by multiplication; negatives count as 0.
//!
//! - `on_exercise(&Exercise)`
//!   Observe a freshly started round.
//!
//! - `on_outcome(&Out)`
//!   Observe a finished round (the genre decides what `Out` is).
//!
//! - `on_achievement(&AchievementNotice)`
//!   Observe each unlock, e.g. to drive a banner.
//!
//! Hooks should *modulate* or *observe*; they must not rebuild scoring.
//!
//! ## Determinism
//! Every system is deterministic given its inputs and the RNG stream. Seed
//! the RNG in tests, or pass a scripted `RngCore`.

use crate::systems::achievements::AchievementNotice;
use crate::systems::generator::Exercise;
use crate::systems::patterns::Pattern;

/// Optional participant in a session. Every method has a no-op default.
pub trait Hook<Out> {
    /// Multiplier applied to `pattern`'s selection weight.
    fn pattern_weight(&mut self, _pattern: Pattern, _base_weight: f64) -> f64 {
        1.0
    }
    fn on_exercise(&mut self, _exercise: &Exercise) {}
    fn on_outcome(&mut self, _outcome: &Out) {}
    fn on_achievement(&mut self, _notice: &AchievementNotice) {}
}
