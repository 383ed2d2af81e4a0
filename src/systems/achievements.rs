//! Achievement catalogue and unlock bookkeeping.

use serde::Serialize;

pub const SPEED_DEMON_SECS: f64 = 10.0;
pub const MATHEMATICIAN_EXERCISES: u32 = 50;
pub const EXPERT_LEVEL: u32 = 10;
pub const BIG_NUMBER: u64 = 10_000_000;
pub const PATTERN_MASTER_KINDS: usize = 10;
pub const EFFICIENCY_EXPERT_EXERCISES: u32 = 20;
pub const EFFICIENCY_EXPERT_MEAN: f64 = 0.9;
pub const LIGHTNING_FAST_EXERCISES: u32 = 10;
pub const LIGHTNING_FAST_MEAN_SECS: f64 = 15.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Achievement {
    #[serde(rename = "first_perfect")]
    FirstPerfect,
    #[serde(rename = "speed_demon")]
    SpeedDemon,
    #[serde(rename = "streak_5")]
    Streak5,
    #[serde(rename = "streak_10")]
    Streak10,
    #[serde(rename = "mathematician")]
    Mathematician,
    #[serde(rename = "pattern_master")]
    PatternMaster,
    #[serde(rename = "efficiency_expert")]
    EfficiencyExpert,
    #[serde(rename = "level_10")]
    Level10,
    #[serde(rename = "big_numbers")]
    BigNumbers,
    #[serde(rename = "lightning_fast")]
    LightningFast,
}

/// Payload handed to the UI when something unlocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AchievementNotice {
    pub id: Achievement,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// The slice of session state the predicates look at.
#[derive(Clone, Copy, Debug, Default)]
pub struct Standing {
    pub perfect_solutions: u32,
    pub streak: u32,
    pub total_exercises: u32,
    pub player_level: u32,
    /// Target of the exercise just completed.
    pub target: u64,
    pub distinct_patterns: usize,
    /// Completion time of the answer being scored, if any.
    pub elapsed_secs: Option<f64>,
    pub mean_efficiency: f64,
    pub mean_completion_secs: f64,
}

impl Achievement {
    /// Evaluation order; also the order new unlocks are reported in.
    pub const ALL: [Achievement; 10] = [
        Achievement::FirstPerfect,
        Achievement::SpeedDemon,
        Achievement::Streak5,
        Achievement::Streak10,
        Achievement::Mathematician,
        Achievement::Level10,
        Achievement::BigNumbers,
        Achievement::PatternMaster,
        Achievement::EfficiencyExpert,
        Achievement::LightningFast,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Achievement::FirstPerfect => "first_perfect",
            Achievement::SpeedDemon => "speed_demon",
            Achievement::Streak5 => "streak_5",
            Achievement::Streak10 => "streak_10",
            Achievement::Mathematician => "mathematician",
            Achievement::PatternMaster => "pattern_master",
            Achievement::EfficiencyExpert => "efficiency_expert",
            Achievement::Level10 => "level_10",
            Achievement::BigNumbers => "big_numbers",
            Achievement::LightningFast => "lightning_fast",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Achievement::FirstPerfect => "Perfect Start",
            Achievement::SpeedDemon => "Speed Demon",
            Achievement::Streak5 => "On Fire",
            Achievement::Streak10 => "Unstoppable",
            Achievement::Mathematician => "Mathematician",
            Achievement::PatternMaster => "Pattern Master",
            Achievement::EfficiencyExpert => "Efficiency Expert",
            Achievement::Level10 => "Expert",
            Achievement::BigNumbers => "Big Number Handler",
            Achievement::LightningFast => "Lightning Fast",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::FirstPerfect => "Complete your first exercise with optimal clicks",
            Achievement::SpeedDemon => "Complete an exercise in under 10 seconds",
            Achievement::Streak5 => "Get 5 perfect solutions in a row",
            Achievement::Streak10 => "Get 10 perfect solutions in a row",
            Achievement::Mathematician => "Complete 50 exercises",
            Achievement::PatternMaster => "Solve 10 different pattern types",
            Achievement::EfficiencyExpert => "Maintain 90%+ efficiency over 20 exercises",
            Achievement::Level10 => "Reach level 10",
            Achievement::BigNumbers => "Solve a number over 10 million",
            Achievement::LightningFast => "Average under 15 seconds per exercise over 10 exercises",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Achievement::FirstPerfect => "⭐",
            Achievement::SpeedDemon => "⚡",
            Achievement::Streak5 => "🔥",
            Achievement::Streak10 => "💫",
            Achievement::Mathematician => "🎓",
            Achievement::PatternMaster => "🧩",
            Achievement::EfficiencyExpert => "🎯",
            Achievement::Level10 => "👑",
            Achievement::BigNumbers => "🌟",
            Achievement::LightningFast => "⚡️",
        }
    }

    pub fn notice(self) -> AchievementNotice {
        AchievementNotice {
            id: self,
            name: self.name(),
            description: self.description(),
            icon: self.icon(),
        }
    }

    pub fn is_met(self, s: &Standing) -> bool {
        match self {
            Achievement::FirstPerfect => s.perfect_solutions >= 1,
            Achievement::SpeedDemon => s.elapsed_secs.is_some_and(|t| t < SPEED_DEMON_SECS),
            Achievement::Streak5 => s.streak == 5,
            Achievement::Streak10 => s.streak == 10,
            Achievement::Mathematician => s.total_exercises >= MATHEMATICIAN_EXERCISES,
            Achievement::Level10 => s.player_level >= EXPERT_LEVEL,
            Achievement::BigNumbers => s.target > BIG_NUMBER,
            Achievement::PatternMaster => s.distinct_patterns >= PATTERN_MASTER_KINDS,
            Achievement::EfficiencyExpert => {
                s.total_exercises >= EFFICIENCY_EXPERT_EXERCISES
                    && s.mean_efficiency >= EFFICIENCY_EXPERT_MEAN
            }
            Achievement::LightningFast => {
                s.total_exercises >= LIGHTNING_FAST_EXERCISES
                    && s.mean_completion_secs < LIGHTNING_FAST_MEAN_SECS
            }
        }
    }
}

/// Unlocked achievements in unlock order. Never shrinks, never repeats.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AchievementBook {
    unlocked: Vec<Achievement>,
}

impl AchievementBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unlock everything newly satisfied by `standing`; returns the new ones.
    pub fn check(&mut self, standing: &Standing) -> Vec<Achievement> {
        let fresh: Vec<Achievement> = Achievement::ALL
            .into_iter()
            .filter(|a| !self.contains(*a) && a.is_met(standing))
            .collect();
        self.unlocked.extend_from_slice(&fresh);
        fresh
    }

    pub fn contains(&self, a: Achievement) -> bool {
        self.unlocked.contains(&a)
    }

    pub fn unlocked(&self) -> &[Achievement] {
        &self.unlocked
    }

    /// The last `n` unlocks, oldest first.
    pub fn recent(&self, n: usize) -> &[Achievement] {
        &self.unlocked[self.unlocked.len().saturating_sub(n)..]
    }

    pub fn len(&self) -> usize {
        self.unlocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_correct_perfect_answer() {
        let mut book = AchievementBook::new();
        let s = Standing {
            perfect_solutions: 1,
            streak: 1,
            total_exercises: 1,
            player_level: 1,
            target: 23,
            distinct_patterns: 1,
            elapsed_secs: Some(12.0),
            mean_efficiency: 1.0,
            mean_completion_secs: 12.0,
        };
        assert_eq!(book.check(&s), vec![Achievement::FirstPerfect]);
        // Already unlocked: nothing new.
        assert!(book.check(&s).is_empty());
    }

    #[test]
    fn streaks_fire_on_exact_values() {
        let mut s = Standing { streak: 5, ..Standing::default() };
        assert!(Achievement::Streak5.is_met(&s));
        s.streak = 6;
        assert!(!Achievement::Streak5.is_met(&s));
        s.streak = 10;
        assert!(Achievement::Streak10.is_met(&s));
    }

    #[test]
    fn speed_needs_a_real_time() {
        let s = Standing { elapsed_secs: None, ..Standing::default() };
        assert!(!Achievement::SpeedDemon.is_met(&s));
        let s = Standing { elapsed_secs: Some(9.9), ..Standing::default() };
        assert!(Achievement::SpeedDemon.is_met(&s));
    }

    #[test]
    fn big_numbers_is_strictly_over_ten_million() {
        let s = Standing { target: 10_000_000, ..Standing::default() };
        assert!(!Achievement::BigNumbers.is_met(&s));
        let s = Standing { target: 10_000_001, ..Standing::default() };
        assert!(Achievement::BigNumbers.is_met(&s));
    }

    #[test]
    fn averaged_achievements_need_enough_rounds() {
        let mut s = Standing {
            total_exercises: 19,
            mean_efficiency: 0.95,
            mean_completion_secs: 8.0,
            ..Standing::default()
        };
        assert!(!Achievement::EfficiencyExpert.is_met(&s));
        assert!(Achievement::LightningFast.is_met(&s));
        s.total_exercises = 20;
        assert!(Achievement::EfficiencyExpert.is_met(&s));
    }

    #[test]
    fn recent_keeps_unlock_order() {
        let mut book = AchievementBook::new();
        book.check(&Standing { perfect_solutions: 1, ..Standing::default() });
        book.check(&Standing { streak: 5, ..Standing::default() });
        book.check(&Standing { player_level: 10, ..Standing::default() });
        book.check(&Standing { target: 20_000_000, ..Standing::default() });
        assert_eq!(
            book.recent(3),
            &[Achievement::Streak5, Achievement::Level10, Achievement::BigNumbers]
        );
        assert_eq!(book.len(), 4);
        assert_eq!(Achievement::Level10.notice().name, "Expert");
    }
}
