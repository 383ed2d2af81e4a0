// src/genres/sdk.rs

//! # Genre SDK
//!
//! Glue shared by **genres**: front-end facing orchestrators that run the
//! systems as one game loop. A genre owns the mutable player state; the
//! systems it calls stay pure.
//!
//! This module holds what every genre needs at its boundary:
//! - a [`Clock`] so time limits can be checked against an injected time
//!   source (a UI's own timeline, a test's manual clock, or the system
//!   clock);
//! - the plain-data **views** handed across the boundary. They carry no
//!   rendering concerns and serialize with `camelCase` fields, so each
//!   operation maps onto a request/response body if the session is ever
//!   served over a process boundary.
//!
//! ## Adding a genre
//! 1. Create `src/genres/<name>.rs` and gate it behind `genre-<name>`.
//! 2. Own the session state in one struct; take `RngCore` and [`Clock`]
//!    as type parameters so tests can inject both.
//! 3. Call systems for generation, history, achievements and hints.
//! 4. Return the views below (or extend them) from every operation.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use serde::Serialize;

use crate::mechanics::decompose::PathStep;
use crate::systems::achievements::{Achievement, AchievementNotice};
use crate::systems::generator::Exercise;
use crate::systems::patterns::{Difficulty, Pattern};
use crate::systems::profile::{ExerciseHistory, LearningProfile};

#[cfg(feature = "system-hint_advisor")]
pub use crate::systems::hint_advisor::Hint as HintView;

/// Monotonic time source, in seconds from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock measured from construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock. Clones share one reading, so a caller can keep a
/// handle and move time after giving a clone to the session.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    secs: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, secs: f64) {
        self.secs.set(self.secs.get() + secs.max(0.0));
    }

    pub fn set(&self, secs: f64) {
        self.secs.set(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.secs.get()
    }
}

/* --- boundary views --- */

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseView {
    pub target: u64,
    pub difficulty_label: Difficulty,
    pub pattern: Pattern,
    pub pattern_label: String,
    pub min_clicks: u64,
    pub points_base: u64,
    pub bonus_multiplier: f64,
    pub time_limit_seconds: u32,
    pub explanation: String,
}

impl From<&Exercise> for ExerciseView {
    fn from(ex: &Exercise) -> Self {
        Self {
            target: ex.target(),
            difficulty_label: ex.difficulty(),
            pattern: ex.pattern(),
            pattern_label: ex.pattern().label(),
            min_clicks: ex.min_clicks(),
            points_base: ex.points_base(),
            bonus_multiplier: ex.bonus_multiplier(),
            time_limit_seconds: ex.time_limit_secs(),
            explanation: ex.explanation().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    pub clicks_used: u64,
    pub current_total: u64,
    pub streak: u32,
    pub player_level: u32,
    pub experience_current: u64,
    pub experience_required: u64,
    pub overall_efficiency_percent: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Correct,
    Overshoot,
    /// Submitted while still under the target.
    Progress,
    Timeout,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeView {
    pub kind: OutcomeKind,
    pub message: String,
    pub target: u64,
    pub current_total: u64,
    pub clicks_used: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_earned: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,
    /// Target minus total, for `Progress` outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference: Option<u64>,
    pub suggestion: Vec<PathStep>,
    pub new_achievements: Vec<AchievementNotice>,
    pub leveled_up: bool,
}

/// A click either moves the round forward or finds the time already up.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", content = "view", rename_all = "snake_case")]
pub enum ClickResult {
    Progress(ProgressView),
    TimedOut(OutcomeView),
}

/// Read-only picture of the persistent stats.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub score: u64,
    pub experience: u64,
    pub player_level: u32,
    pub streak: u32,
    pub max_streak: u32,
    pub total_exercises: u32,
    pub perfect_solutions: u32,
    pub adaptive_difficulty: f64,
    pub overall_efficiency_percent: f64,
    pub achievements: Vec<Achievement>,
    pub recent_achievements: Vec<AchievementNotice>,
    pub learning_profile: LearningProfile,
    pub history: ExerciseHistory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(12.5);
        assert_eq!(clock.now(), 12.5);
        handle.advance(-3.0);
        assert_eq!(clock.now(), 12.5);
        handle.set(1.0);
        assert_eq!(clock.now(), 1.0);
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock::new();
        let a = clock.now();
        assert!(clock.now() >= a);
    }
}
