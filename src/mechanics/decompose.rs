/// Greedy decomposition over the calculator's denominations.
///
/// The button set is exactly the power-of-ten ladder 1..=1e7, a canonical
/// coin system: taking the largest denomination first is optimal, so the
/// minimum click count for any target is its greedy count.
use std::fmt;

use serde::Serialize;

/// Calculator buttons, largest first.
pub const DENOMINATIONS: [u64; 8] = [
    10_000_000, 1_000_000, 100_000, 10_000, 1_000, 100, 10, 1,
];

/// Suggestions stop after this many distinct denominations.
pub const SUGGESTION_STEPS: usize = 3;

/// `count` presses of the `denomination` button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PathStep {
    pub count: u64,
    pub denomination: u64,
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×(+{})", self.count, self.denomination)
    }
}

/// Whether `value` is one of the calculator buttons.
#[inline]
pub fn is_denomination(value: u64) -> bool {
    DENOMINATIONS.contains(&value)
}

/// Minimum number of additions that reach `target` from zero.
#[inline]
pub fn count(target: u64) -> u64 {
    let mut remaining = target;
    let mut clicks = 0;
    for d in DENOMINATIONS {
        let times = remaining / d;
        clicks += times;
        remaining -= times * d;
        if remaining == 0 {
            break;
        }
    }
    clicks
}

/// The complete greedy path for `remaining`, skipping unused buttons.
pub fn full_path(remaining: u64) -> Vec<PathStep> {
    let mut rest = remaining;
    let mut path = Vec::new();
    for d in DENOMINATIONS {
        let times = rest / d;
        if times > 0 {
            path.push(PathStep { count: times, denomination: d });
            rest -= times * d;
        }
        if rest == 0 {
            break;
        }
    }
    path
}

/// Greedy path truncated to the first [`SUGGESTION_STEPS`] non-zero steps.
/// For hints only; scoring always uses [`count`].
pub fn suggest_path(remaining: u64) -> Vec<PathStep> {
    let mut path = full_path(remaining);
    path.truncate(SUGGESTION_STEPS);
    path
}

/// `a×(+x) + b×(+y) + …`
pub fn format_path(path: &[PathStep]) -> String {
    path.iter()
        .map(PathStep::to_string)
        .collect::<Vec<_>>()
        .join(" + ")
}
