// demos/walkthrough.rs
// Run with:
//   RUST_LOG=sum_challenge=debug cargo run --example walkthrough

use sum_challenge::genres::calculator::*;
use sum_challenge::genres::{ClickResult, ManualClock};
use sum_challenge::mechanics::decompose;
use sum_challenge::systems::generator::Exercise;
use sum_challenge::systems::patterns::Pattern;
use rand_core::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Scripted timeline: the demo moves time by hand.
    let clock = ManualClock::new();
    let cfg = SessionConfig::with_seed(2024);
    let rng = bevy_prng::WyRand::from_seed(2024u64.to_le_bytes());
    let mut session = Session::with_parts(cfg, rng, clock.clone());

    // 1) A few generated rounds, played along the greedy path.
    for round in 1..=4 {
        let ex = session.start_exercise();
        println!("== Round {round}: {} ({}, {} pts) ==", ex.target, ex.pattern_label, ex.points_base);
        println!("   {}", ex.explanation);

        clock.advance(6.0);
        for step in decompose::full_path(ex.target) {
            for _ in 0..step.count {
                if let Ok(ClickResult::TimedOut(out)) = session.click(step.denomination) {
                    println!("{}", out.message);
                }
            }
        }
        match session.submit() {
            Ok(out) => println!("{}\n", out.message),
            Err(e) => println!("submit rejected: {e}\n"),
        }
    }

    // 2) A custom drill: overshoot, reset, ask for a hint, finish.
    session.start_exercise_with(Exercise::new(Pattern::Palindromes, 1221, 0.4, 90, "warm-up palindrome"));
    let _ = session.click(10_000);
    if let Ok(p) = session.reset_total() {
        println!("reset after overshoot: total {} in {} clicks", p.current_total, p.clicks_used);
    }
    if let Ok(hint) = session.request_hint() {
        println!("hint [{}]:\n{}\n", hint.strategy, hint.text);
    }
    for v in [1000, 100, 100, 10, 10, 1] {
        let _ = session.click(v);
    }
    clock.advance(25.0);
    if let Ok(out) = session.submit() {
        println!("{}\n", out.message);
    }

    // 3) Let one run out.
    let ex = session.start_exercise();
    clock.advance(f64::from(ex.time_limit_seconds) + 1.0);
    if let Ok(ClickResult::TimedOut(out)) = session.click(1) {
        println!("{}\n", out.message);
    }

    let snap = session.snapshot();
    println!("== Session ==");
    println!("score {} | level {} | streak {} (best {})", snap.score, snap.player_level, snap.streak, snap.max_streak);
    println!("adaptive difficulty {:.2}", snap.adaptive_difficulty);
    for a in &snap.recent_achievements {
        println!("{} {}: {}", a.icon, a.name, a.description);
    }
    match serde_json::to_string_pretty(&snap) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("snapshot not serializable: {e}"),
    }
}
