//! Per-pattern attempt history and the learning profile derived from it.
//!
//! The profile is never patched in place: after every answer it is rebuilt
//! from the full history.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::systems::patterns::Pattern;

/// Patterns need this many attempts before they can be judged.
pub const MIN_ATTEMPTS: u32 = 3;
pub const STRENGTH_THRESHOLD: f64 = 0.8;
pub const WEAKNESS_THRESHOLD: f64 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRecord {
    pub attempts: u32,
    pub successes: u32,
    /// Halving average over successful rounds, starting from 0.
    pub avg_efficiency: f64,
}

impl PatternRecord {
    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            f64::from(self.successes) / f64::from(self.attempts)
        }
    }
}

/// Append-only attempt log keyed by pattern.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExerciseHistory {
    records: BTreeMap<Pattern, PatternRecord>,
}

impl ExerciseHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, pattern: Pattern, efficiency: f64) {
        let r = self.records.entry(pattern).or_default();
        r.attempts += 1;
        r.successes += 1;
        r.avg_efficiency = (r.avg_efficiency + efficiency) / 2.0;
    }

    pub fn record_failure(&mut self, pattern: Pattern) {
        self.records.entry(pattern).or_default().attempts += 1;
    }

    pub fn get(&self, pattern: Pattern) -> Option<&PatternRecord> {
        self.records.get(&pattern)
    }

    /// Number of distinct patterns attempted.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pattern, &PatternRecord)> {
        self.records.iter().map(|(p, r)| (*p, r))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LearningProfile {
    pub strengths: BTreeSet<Pattern>,
    pub weaknesses: BTreeSet<Pattern>,
}

impl LearningProfile {
    pub fn from_history(history: &ExerciseHistory) -> Self {
        let mut profile = Self::default();
        for (pattern, r) in history.iter() {
            if r.attempts < MIN_ATTEMPTS {
                continue;
            }
            let rate = r.success_rate();
            if rate >= STRENGTH_THRESHOLD && r.avg_efficiency >= STRENGTH_THRESHOLD {
                profile.strengths.insert(pattern);
            } else if rate < WEAKNESS_THRESHOLD || r.avg_efficiency < WEAKNESS_THRESHOLD {
                profile.weaknesses.insert(pattern);
            }
        }
        profile
    }

    pub fn is_strength(&self, pattern: Pattern) -> bool {
        self.strengths.contains(&pattern)
    }

    pub fn is_weakness(&self, pattern: Pattern) -> bool {
        self.weaknesses.contains(&pattern)
    }
}
