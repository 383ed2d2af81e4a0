/*!
`sum_challenge`: adaptive exercises for a number-building calculator game.

What it does
- The player reaches an exact target by pressing buttons that add
  1, 10, 100, … 10 000 000 to a running total, in as few presses as possible.
- Builds targets from eight mathematical patterns (powers of ten, repunits,
  palindromes, sequences, prime sums, geometric, factorial-like, dynamic).
- Scores answers by efficiency, speed, streak and pattern difficulty; tracks
  experience, levels and achievements; adapts the difficulty to results and
  leans pattern choice toward the player's history.

How to use (call surface only)
- `genres::calculator::Session::new(SessionConfig::default())` for a ready
  session, or `Session::with_parts(config, rng, clock)` to inject both.
- `start_exercise()`, then `click(value)` / `reset_total()` / `request_hint()`,
  then `submit()`. Read `progress()` and `snapshot()` at any time.
- Every operation returns a plain serde view; nothing renders.

Layout
- `mechanics`: pure functions (decomposition, scoring curves, clamping, draws).
- `systems`:   self-contained concerns (patterns, generator, profile,
               achievements, hints) plus the `Hook` protocol.
- `genres`:    the session engine that owns the player state.

What it does NOT do
- No rendering, persistence, networking or real-time timers.
*/

pub mod error;
pub mod mechanics;
pub mod systems;
pub mod genres;

pub use error::{Result, SessionError};
