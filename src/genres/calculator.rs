// src/genres/calculator.rs
#![cfg(feature = "genre-calculator")]

//! Calculator genre: the session engine.
//!
//! Coordinates the systems around one player:
//! - generator     → next exercise from the effective complexity
//! - scoring       → points, experience, level
//! - achievements  → unlocks after every correct answer
//! - profile       → history + strengths/weaknesses, rebuilt each answer
//! - hint_advisor  → hints on request
//!
//! Each round is a two-state machine. **Idle** rejects clicks and
//! submissions; **Active** accepts clicks and exactly one submission.
//! Time limits are checked when a click or a submission arrives, never by a
//! running timer.

use std::time::{SystemTime, UNIX_EPOCH};

use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};
use crate::genres::sdk::{
    ClickResult, Clock, ExerciseView, OutcomeKind, OutcomeView, ProgressView, StatsSnapshot,
    SystemClock,
};
use crate::mechanics::{control, decompose, scoring};
use crate::systems::achievements::{AchievementBook, AchievementNotice, Standing};
use crate::systems::generator::{self, Exercise};
use crate::systems::profile::{ExerciseHistory, LearningProfile};
use crate::systems::sdk::Hook;

#[cfg(feature = "system-hint_advisor")]
use crate::genres::sdk::HintView;
#[cfg(feature = "system-hint_advisor")]
use crate::systems::hint_advisor;

/// Number of unlocks reported as "recent" in snapshots.
const RECENT_ACHIEVEMENTS: usize = 3;

/// Band the adaptive difficulty lives in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyBounds {
    pub min: f64,
    pub max: f64,
}

impl DifficultyBounds {
    pub fn soft_defaults() -> Self {
        Self { min: 0.1, max: 1.0 }
    }

    /// x + delta, clamped into the band.
    pub fn nudge(&self, x: f64, delta: f64) -> f64 {
        control::nudge(x, delta, self.min, self.max)
    }
}

impl Default for DifficultyBounds {
    fn default() -> Self {
        Self::soft_defaults()
    }
}

/// Steps applied to the adaptive difficulty after each round.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifficultyGains {
    /// Success with efficiency above `fast_efficiency` in under `fast_secs`.
    pub fast_success: f64,
    /// Any other success.
    pub success: f64,
    /// Overshoot, undershoot or timeout.
    pub failure: f64,
    pub fast_efficiency: f64,
    pub fast_secs: f64,
}

impl DifficultyGains {
    /// Step for a round: `Some((efficiency, secs))` on success, `None` on failure.
    pub fn step(&self, success: Option<(f64, f64)>) -> f64 {
        match success {
            Some((eff, secs)) if eff > self.fast_efficiency && secs < self.fast_secs => {
                self.fast_success
            }
            Some(_) => self.success,
            None => self.failure,
        }
    }
}

impl Default for DifficultyGains {
    fn default() -> Self {
        Self {
            fast_success: 0.05,
            success: 0.02,
            failure: -0.03,
            fast_efficiency: 0.8,
            fast_secs: 30.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub initial_difficulty: f64,
    pub bounds: DifficultyBounds,
    pub gains: DifficultyGains,
    /// Complexity added per level above 1.
    pub level_complexity_step: f64,
    /// Ceiling on the complexity handed to the generator.
    pub complexity_cap: f64,
    /// Seed for the default RNG; `None` seeds from the system clock.
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_difficulty: 0.5,
            bounds: DifficultyBounds::soft_defaults(),
            gains: DifficultyGains::default(),
            level_complexity_step: 0.1,
            complexity_cap: 0.9,
            seed: None,
        }
    }
}

struct Round {
    exercise: Exercise,
    clicks_used: u64,
    current_total: u64,
    started_at: f64,
}

enum Phase {
    Idle,
    Active(Round),
}

#[derive(Clone, Debug)]
struct Stats {
    score: u64,
    experience: u64,
    player_level: u32,
    streak: u32,
    max_streak: u32,
    total_exercises: u32,
    perfect_solutions: u32,
    efficiency_sum: f64,
    completion_secs_sum: f64,
}

impl Stats {
    fn new() -> Self {
        Self {
            score: 0,
            experience: 0,
            player_level: 1,
            streak: 0,
            max_streak: 0,
            total_exercises: 0,
            perfect_solutions: 0,
            efficiency_sum: 0.0,
            completion_secs_sum: 0.0,
        }
    }

    fn mean(&self, sum: f64) -> f64 {
        if self.total_exercises == 0 { 0.0 } else { sum / f64::from(self.total_exercises) }
    }
}

/// One player's play session. Owns all mutable game state.
pub struct Session<R: RngCore = WyRand, C: Clock = SystemClock> {
    cfg: SessionConfig,
    rng: R,
    clock: C,
    phase: Phase,
    stats: Stats,
    adaptive_difficulty: f64,
    history: ExerciseHistory,
    profile: LearningProfile,
    achievements: AchievementBook,
    hooks: Vec<Box<dyn Hook<OutcomeView>>>,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}

impl Session {
    /// Session on a seeded `WyRand` and the system clock.
    pub fn new(cfg: SessionConfig) -> Self {
        let seed = cfg.seed.unwrap_or_else(clock_seed);
        let rng = WyRand::from_seed(seed.to_le_bytes());
        Self::with_parts(cfg, rng, SystemClock::new())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl<R: RngCore, C: Clock> Session<R, C> {
    pub fn with_parts(cfg: SessionConfig, rng: R, clock: C) -> Self {
        let adaptive_difficulty = cfg.bounds.nudge(cfg.initial_difficulty, 0.0);
        Self {
            cfg,
            rng,
            clock,
            phase: Phase::Idle,
            stats: Stats::new(),
            adaptive_difficulty,
            history: ExerciseHistory::new(),
            profile: LearningProfile::default(),
            achievements: AchievementBook::new(),
            hooks: Vec::new(),
        }
    }

    pub fn add_hook(&mut self, hook: Box<dyn Hook<OutcomeView>>) {
        self.hooks.push(hook);
    }

    pub fn config(&self) -> &SessionConfig {
        &self.cfg
    }

    pub fn adaptive_difficulty(&self) -> f64 {
        self.adaptive_difficulty
    }

    /// min(cap, adaptive + (level - 1) · step).
    pub fn effective_complexity(&self) -> f64 {
        let lift = f64::from(self.stats.player_level.saturating_sub(1)) * self.cfg.level_complexity_step;
        (self.adaptive_difficulty + lift).min(self.cfg.complexity_cap)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    pub fn current_exercise(&self) -> Option<&Exercise> {
        match &self.phase {
            Phase::Active(r) => Some(&r.exercise),
            Phase::Idle => None,
        }
    }

    /// Seconds since the current round started.
    pub fn elapsed_secs(&self) -> Option<f64> {
        match &self.phase {
            Phase::Active(r) => Some(self.clock.now() - r.started_at),
            Phase::Idle => None,
        }
    }

    /// Seconds left before the round times out, floored at 0.
    pub fn remaining_secs(&self) -> Option<f64> {
        match &self.phase {
            Phase::Active(r) => {
                let limit = f64::from(r.exercise.time_limit_secs());
                Some((limit - (self.clock.now() - r.started_at)).max(0.0))
            }
            Phase::Idle => None,
        }
    }

    /* --- round lifecycle --- */

    /// Generate an exercise and start a round on it. Abandons any round in
    /// progress without scoring it.
    pub fn start_exercise(&mut self) -> ExerciseView {
        let complexity = self.effective_complexity();
        let exercise = generator::generate(complexity, &self.profile, &mut self.hooks, &mut self.rng);
        self.begin(exercise)
    }

    /// Start a round on a caller-built exercise.
    pub fn start_exercise_with(&mut self, exercise: Exercise) -> ExerciseView {
        self.begin(exercise)
    }

    fn begin(&mut self, exercise: Exercise) -> ExerciseView {
        for h in self.hooks.iter_mut() {
            h.on_exercise(&exercise);
        }
        let view = ExerciseView::from(&exercise);
        self.phase = Phase::Active(Round {
            exercise,
            clicks_used: 0,
            current_total: 0,
            started_at: self.clock.now(),
        });
        view
    }

    /// Add a button press to the running total. A click arriving after the
    /// time limit is discarded and ends the round as a timeout.
    pub fn click(&mut self, value: u64) -> Result<ClickResult> {
        if !decompose::is_denomination(value) {
            tracing::warn!(value, "rejected click: not a calculator button");
            return Err(SessionError::InvalidDenomination(value));
        }
        let mut round = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Active(r) => r,
            Phase::Idle => {
                tracing::warn!(value, "rejected click: no active exercise");
                return Err(SessionError::NotActive);
            }
        };
        if self.expired(&round) {
            return Ok(ClickResult::TimedOut(self.time_up(round)));
        }
        round.clicks_used += 1;
        round.current_total = round.current_total.saturating_add(value);
        tracing::debug!(value, total = round.current_total, clicks = round.clicks_used, "click");
        self.phase = Phase::Active(round);
        Ok(ClickResult::Progress(self.progress()))
    }

    /// Clear the running total; clicks already spent stay counted.
    pub fn reset_total(&mut self) -> Result<ProgressView> {
        match &mut self.phase {
            Phase::Active(r) => r.current_total = 0,
            Phase::Idle => {
                tracing::warn!("rejected reset: no active exercise");
                return Err(SessionError::NotActive);
            }
        }
        Ok(self.progress())
    }

    /// Submit the running total. Ends the round whatever the outcome.
    pub fn submit(&mut self) -> Result<OutcomeView> {
        let round = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Active(r) => r,
            Phase::Idle => {
                tracing::warn!("rejected submit: no active exercise");
                return Err(SessionError::NotActive);
            }
        };
        if self.expired(&round) {
            return Ok(self.time_up(round));
        }
        let elapsed = self.clock.now() - round.started_at;
        let target = round.exercise.target();
        let outcome = if round.current_total == target {
            self.score_correct(round, elapsed)
        } else if round.current_total > target {
            self.overshoot(round)
        } else {
            self.undershoot(round)
        };
        self.emit(&outcome);
        Ok(outcome)
    }

    #[cfg(feature = "system-hint_advisor")]
    pub fn request_hint(&mut self) -> Result<HintView> {
        let Phase::Active(round) = &self.phase else {
            tracing::warn!("rejected hint: no active exercise");
            return Err(SessionError::NotActive);
        };
        let hint = hint_advisor::hint(&round.exercise, round.current_total, &mut self.rng);
        tracing::debug!(strategy = %hint.strategy, remaining = hint.remaining, "hint");
        Ok(hint)
    }

    /* --- views --- */

    pub fn progress(&self) -> ProgressView {
        let (clicks_used, current_total) = match &self.phase {
            Phase::Active(r) => (r.clicks_used, r.current_total),
            Phase::Idle => (0, 0),
        };
        ProgressView {
            clicks_used,
            current_total,
            streak: self.stats.streak,
            player_level: self.stats.player_level,
            experience_current: self.stats.experience,
            experience_required: scoring::exp_required(self.stats.player_level),
            overall_efficiency_percent: scoring::overall_efficiency_percent(
                self.stats.perfect_solutions,
                self.stats.total_exercises,
            ),
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let s = &self.stats;
        StatsSnapshot {
            score: s.score,
            experience: s.experience,
            player_level: s.player_level,
            streak: s.streak,
            max_streak: s.max_streak,
            total_exercises: s.total_exercises,
            perfect_solutions: s.perfect_solutions,
            adaptive_difficulty: self.adaptive_difficulty,
            overall_efficiency_percent: scoring::overall_efficiency_percent(
                s.perfect_solutions,
                s.total_exercises,
            ),
            achievements: self.achievements.unlocked().to_vec(),
            recent_achievements: self
                .achievements
                .recent(RECENT_ACHIEVEMENTS)
                .iter()
                .map(|a| a.notice())
                .collect(),
            learning_profile: self.profile.clone(),
            history: self.history.clone(),
        }
    }

    /* --- internals --- */

    fn expired(&self, round: &Round) -> bool {
        self.clock.now() - round.started_at > f64::from(round.exercise.time_limit_secs())
    }

    fn time_up(&mut self, round: Round) -> OutcomeView {
        let target = round.exercise.target();
        self.record_failure(&round);
        let outcome = OutcomeView {
            kind: OutcomeKind::Timeout,
            message: format!("Time's up! The target was {target}. Try again!"),
            target,
            current_total: round.current_total,
            clicks_used: round.clicks_used,
            points_earned: None,
            efficiency: None,
            difference: None,
            suggestion: Vec::new(),
            new_achievements: Vec::new(),
            leveled_up: false,
        };
        self.emit(&outcome);
        outcome
    }

    fn overshoot(&mut self, round: Round) -> OutcomeView {
        let target = round.exercise.target();
        self.record_failure(&round);
        OutcomeView {
            kind: OutcomeKind::Overshoot,
            message: format!(
                "Overshot! You have {}, but need exactly {target}. Reset and try a different approach.",
                round.current_total
            ),
            target,
            current_total: round.current_total,
            clicks_used: round.clicks_used,
            points_earned: None,
            efficiency: None,
            difference: None,
            suggestion: Vec::new(),
            new_achievements: Vec::new(),
            leveled_up: false,
        }
    }

    fn undershoot(&mut self, round: Round) -> OutcomeView {
        let target = round.exercise.target();
        let difference = target - round.current_total;
        let suggestion = decompose::suggest_path(difference);
        self.record_failure(&round);
        OutcomeView {
            kind: OutcomeKind::Progress,
            message: format!(
                "Current: {}, Target: {target} ({difference} more needed)\nTry: {}",
                round.current_total,
                decompose::format_path(&suggestion)
            ),
            target,
            current_total: round.current_total,
            clicks_used: round.clicks_used,
            points_earned: None,
            efficiency: None,
            difference: Some(difference),
            suggestion,
            new_achievements: Vec::new(),
            leveled_up: false,
        }
    }

    fn score_correct(&mut self, round: Round, elapsed: f64) -> OutcomeView {
        let ex = &round.exercise;
        let perfect = round.clicks_used == ex.min_clicks();
        let efficiency = scoring::efficiency(ex.min_clicks(), round.clicks_used);
        let multiplier = ex.bonus_multiplier()
            * scoring::time_bonus(elapsed, f64::from(ex.time_limit_secs()))
            * scoring::streak_bonus(self.stats.streak);
        let points = scoring::points_earned(ex.points_base(), efficiency, multiplier);

        let s = &mut self.stats;
        s.score += points;
        s.total_exercises += 1;
        s.experience += scoring::experience_for(points);
        s.efficiency_sum += efficiency;
        s.completion_secs_sum += elapsed;
        if perfect {
            s.perfect_solutions += 1;
            s.streak += 1;
            s.max_streak = s.max_streak.max(s.streak);
        } else {
            s.streak = 0;
        }

        let leveled_up = self.check_level_up();
        let new_achievements = self.check_achievements(ex.target(), Some(elapsed));
        self.history.record_success(ex.pattern(), efficiency);
        self.profile = LearningProfile::from_history(&self.history);
        self.adapt(Some((efficiency, elapsed)));

        let mut lines = vec![format!("Correct! Target {} achieved!", ex.target())];
        if perfect {
            lines.push(format!("Perfect Solution! Used optimal {} clicks!", round.clicks_used));
        } else {
            lines.push(format!(
                "Used {} clicks (optimal: {})",
                round.clicks_used,
                ex.min_clicks()
            ));
        }
        if elapsed < 15.0 {
            lines.push(format!("Lightning Fast! Completed in {elapsed:.1}s"));
        }
        if self.stats.streak > 1 {
            lines.push(format!("Streak: {}! Keep it up!", self.stats.streak));
        }
        lines.push(format!("Points: {points} ({multiplier:.1}× multiplier)"));
        if leveled_up {
            lines.push(format!(
                "LEVEL UP! You're now Level {}! New challenges unlocked!",
                self.stats.player_level
            ));
        }

        OutcomeView {
            kind: OutcomeKind::Correct,
            message: lines.join("\n"),
            target: ex.target(),
            current_total: round.current_total,
            clicks_used: round.clicks_used,
            points_earned: Some(points),
            efficiency: Some(efficiency),
            difference: None,
            suggestion: Vec::new(),
            new_achievements,
            leveled_up,
        }
    }

    /// Shared bookkeeping for overshoot, undershoot and timeout.
    fn record_failure(&mut self, round: &Round) {
        self.stats.streak = 0;
        self.history.record_failure(round.exercise.pattern());
        self.profile = LearningProfile::from_history(&self.history);
        self.adapt(None);
    }

    /// Experience is cumulative: the threshold rises with the level instead
    /// of experience being spent.
    fn check_level_up(&mut self) -> bool {
        if self.stats.experience < scoring::exp_required(self.stats.player_level) {
            return false;
        }
        self.stats.player_level += 1;
        tracing::info!(level = self.stats.player_level, "level up");
        true
    }

    fn check_achievements(&mut self, target: u64, elapsed_secs: Option<f64>) -> Vec<AchievementNotice> {
        let s = &self.stats;
        let standing = Standing {
            perfect_solutions: s.perfect_solutions,
            streak: s.streak,
            total_exercises: s.total_exercises,
            player_level: s.player_level,
            target,
            distinct_patterns: self.history.len(),
            elapsed_secs,
            mean_efficiency: s.mean(s.efficiency_sum),
            mean_completion_secs: s.mean(s.completion_secs_sum),
        };
        let fresh = self.achievements.check(&standing);
        fresh
            .into_iter()
            .map(|a| {
                tracing::info!(achievement = a.id(), "achievement unlocked");
                let notice = a.notice();
                for h in self.hooks.iter_mut() {
                    h.on_achievement(&notice);
                }
                notice
            })
            .collect()
    }

    fn adapt(&mut self, success: Option<(f64, f64)>) {
        let step = self.cfg.gains.step(success);
        self.adaptive_difficulty = self.cfg.bounds.nudge(self.adaptive_difficulty, step);
    }

    fn emit(&mut self, outcome: &OutcomeView) {
        tracing::debug!(
            kind = ?outcome.kind,
            target = outcome.target,
            total = outcome.current_total,
            points = outcome.points_earned,
            "round finished"
        );
        for h in self.hooks.iter_mut() {
            h.on_outcome(outcome);
        }
    }
}
