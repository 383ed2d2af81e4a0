// tests/common/mod.rs
#![allow(dead_code)]

use rand_core::RngCore;
use sum_challenge::genres::{ManualClock, Session, SessionConfig};
use sum_challenge::systems::generator::Exercise;
use sum_challenge::systems::patterns::Pattern;

/// Replays a fixed list of 64-bit words, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    words: Vec<u64>,
    at: usize,
}

impl ScriptedRng {
    pub fn new(words: Vec<u64>) -> Self {
        assert!(!words.is_empty(), "script needs at least one word");
        Self { words, at: 0 }
    }

    /// Every draw is 0.0.
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }

    /// Words that make `uniform01` return each of `fractions` in turn.
    pub fn fractions(fractions: &[f64]) -> Self {
        let scale = (1u64 << 53) as f64;
        Self::new(
            fractions
                .iter()
                .map(|f| ((f.clamp(0.0, 1.0) * scale) as u64).min((1u64 << 53) - 1) << 11)
                .collect(),
        )
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let w = self.words[self.at % self.words.len()];
        self.at += 1;
        w
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Session on a scripted RNG and a manual clock; the returned clock handle
/// moves the session's time.
pub fn session() -> (Session<ScriptedRng, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let s = Session::with_parts(SessionConfig::default(), ScriptedRng::zeros(), clock.clone());
    (s, clock)
}

/// Easy powers-of-ten exercise with a chosen target.
pub fn drill(target: u64) -> Exercise {
    Exercise::new(Pattern::PowersOfTen, target, 0.2, 100, "drill")
}

/// Same, with a custom point base.
pub fn drill_worth(target: u64, points_base: u64) -> Exercise {
    Exercise::new(Pattern::PowersOfTen, target, 0.2, points_base, "drill")
}
