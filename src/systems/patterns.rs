//! Numeric pattern families.
//!
//! Each [`Pattern`] carries static metadata (selection weight, complexity
//! rating, point curve) in a table indexed by the variant, plus a target
//! construction rule parameterised by the complexity scalar. Rules are
//! deterministic in `complexity` except `prime_sums`,
//! `mathematical_constants` and `dynamic`, which draw from the injected RNG.

use std::fmt;

use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::mechanics::{control, stoch};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    PowersOfTen = 0,
    Palindromes = 1,
    FibonacciLike = 2,
    PrimeSums = 3,
    GeometricSequences = 4,
    FactorialApproximations = 5,
    MathematicalConstants = 6,
    Dynamic = 7,
}

/// Static per-pattern tuning.
#[derive(Clone, Copy, Debug)]
pub struct PatternTuning {
    /// Base roulette weight.
    pub weight: f64,
    /// Fixed complexity rating in [0, 1].
    pub complexity: f64,
    /// Points at complexity 0.
    pub points_floor: f64,
    /// Extra points at complexity 1.
    pub points_span: f64,
}

const TUNING: [PatternTuning; 8] = [
    PatternTuning { weight: 1.0, complexity: 0.2, points_floor: 50.0, points_span: 100.0 },
    PatternTuning { weight: 0.8, complexity: 0.4, points_floor: 60.0, points_span: 120.0 },
    PatternTuning { weight: 0.6, complexity: 0.6, points_floor: 70.0, points_span: 140.0 },
    PatternTuning { weight: 0.7, complexity: 0.7, points_floor: 80.0, points_span: 160.0 },
    PatternTuning { weight: 0.5, complexity: 0.8, points_floor: 90.0, points_span: 180.0 },
    PatternTuning { weight: 0.4, complexity: 0.9, points_floor: 100.0, points_span: 200.0 },
    PatternTuning { weight: 0.3, complexity: 1.0, points_floor: 120.0, points_span: 240.0 },
    // Fallback only: never drawn by the roulette.
    PatternTuning { weight: 0.0, complexity: 0.0, points_floor: 40.0, points_span: 80.0 },
];

impl Pattern {
    /// Patterns the roulette may draw, in table order.
    pub const SELECTABLE: [Pattern; 7] = [
        Pattern::PowersOfTen,
        Pattern::Palindromes,
        Pattern::FibonacciLike,
        Pattern::PrimeSums,
        Pattern::GeometricSequences,
        Pattern::FactorialApproximations,
        Pattern::MathematicalConstants,
    ];

    pub const ALL: [Pattern; 8] = [
        Pattern::PowersOfTen,
        Pattern::Palindromes,
        Pattern::FibonacciLike,
        Pattern::PrimeSums,
        Pattern::GeometricSequences,
        Pattern::FactorialApproximations,
        Pattern::MathematicalConstants,
        Pattern::Dynamic,
    ];

    #[inline]
    pub fn tuning(self) -> &'static PatternTuning {
        &TUNING[self as usize]
    }

    pub fn id(self) -> &'static str {
        match self {
            Pattern::PowersOfTen => "powers_of_ten",
            Pattern::Palindromes => "palindromes",
            Pattern::FibonacciLike => "fibonacci_like",
            Pattern::PrimeSums => "prime_sums",
            Pattern::GeometricSequences => "geometric_sequences",
            Pattern::FactorialApproximations => "factorial_approximations",
            Pattern::MathematicalConstants => "mathematical_constants",
            Pattern::Dynamic => "dynamic",
        }
    }

    /// Display label, e.g. "powers of ten".
    pub fn label(self) -> String {
        self.id().replace('_', " ")
    }

    /// round(floor + complexity · span).
    pub fn points_base(self, complexity: f64) -> u64 {
        let s = self.tuning();
        (s.points_floor + control::unit(complexity) * s.points_span).round() as u64
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Difficulty band derived from the complexity scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn from_complexity(complexity: f64) -> Self {
        if complexity < 0.3 {
            Difficulty::Easy
        } else if complexity < 0.6 {
            Difficulty::Medium
        } else if complexity < 0.8 {
            Difficulty::Hard
        } else {
            Difficulty::Expert
        }
    }

    pub fn time_limit_secs(self) -> u32 {
        match self {
            Difficulty::Easy => 60,
            Difficulty::Medium => 90,
            Difficulty::Hard => 120,
            Difficulty::Expert => 180,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* --- target tables --- */

const REPUNIT_BASES: [u64; 9] = [1, 11, 101, 111, 1001, 1010, 1100, 1110, 1111];
const DECIMAL_MULTIPLIERS: [u64; 7] = [1, 10, 100, 1_000, 10_000, 100_000, 1_000_000];

const PALINDROMES: [u64; 28] = [
    11, 101, 111, 121, 131, 141, 151, 161, 171, 181, 191, 1001, 1111, 1221, 1331, 1441, 1551,
    2112, 2222, 3223, 10001, 10101, 10201, 11011, 11111, 11211, 12121, 12221,
];

// Fibonacci numbers followed by consecutive-integer sums.
const SEQUENCE_VALUES: [u64; 34] = [
    1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584,
    3, 6, 10, 15, 21, 28, 36, 45, 55, 66, 78, 91, 105, 120, 136, 153,
];

const PRIMES: [u64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

const GEOMETRIC_BASES: [u64; 5] = [2, 3, 5, 7, 11];

// FACTORIALS[i] == (i + 1)!
const FACTORIALS: [u64; 9] = [1, 2, 6, 24, 120, 720, 5_040, 40_320, 362_880];

// Leading digits of each constant's decimal expansion.
const CONSTANTS: [(&str, &str); 4] = [
    ("pi", "3141592653589793"),
    ("e", "2718281828459045"),
    ("phi", "1618033988749895"),
    ("sqrt2", "1414213562373095"),
];

/// floor(c · (len - 1)) as a table index.
#[inline]
fn ladder(c: f64, len: usize) -> usize {
    ((c * (len - 1) as f64).floor() as usize).min(len - 1)
}

/// Target value plus the explanation shown next to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Built {
    pub target: u64,
    pub explanation: String,
}

/// Construct a target for `pattern` at `complexity` (clamped to [0, 1]).
/// Every rule yields a target of at least 1.
pub fn build_target<R: RngCore + ?Sized>(pattern: Pattern, complexity: f64, rng: &mut R) -> Built {
    let c = control::unit(complexity);
    let built = match pattern {
        Pattern::PowersOfTen => {
            let base = REPUNIT_BASES[ladder(c, REPUNIT_BASES.len())];
            let multiplier = DECIMAL_MULTIPLIERS[ladder(c, DECIMAL_MULTIPLIERS.len())];
            Built {
                target: base * multiplier,
                explanation: format!(
                    "This is {base} × {multiplier}, representing powers of 10 patterns"
                ),
            }
        }
        Pattern::Palindromes => {
            let target = PALINDROMES[ladder(c * c, PALINDROMES.len())];
            Built {
                target,
                explanation: format!(
                    "{target} is a palindrome - it reads the same forwards and backwards"
                ),
            }
        }
        Pattern::FibonacciLike => {
            let multiplier = (1.0 + c * 100.0).floor() as u64;
            let base = SEQUENCE_VALUES[ladder(c, SEQUENCE_VALUES.len())];
            Built {
                target: base * multiplier,
                explanation: "This number follows a mathematical sequence pattern".to_string(),
            }
        }
        Pattern::PrimeSums => {
            let terms = ((2.0 + c * 4.0).floor() as usize).max(2);
            let prefix = (10.0 + c * 15.0).min(PRIMES.len() as f64);
            let sum: u64 = (0..terms)
                .map(|_| PRIMES[stoch::index_below(rng, prefix, PRIMES.len())])
                .sum();
            let multiplier = (1.0 + c * 1000.0).floor() as u64;
            Built {
                target: sum * multiplier,
                explanation: "This number is related to prime number combinations".to_string(),
            }
        }
        Pattern::GeometricSequences => {
            let i = ((c * GEOMETRIC_BASES.len() as f64).floor() as usize)
                .min(GEOMETRIC_BASES.len() - 1);
            let base = GEOMETRIC_BASES[i];
            let power = (1.0 + c * 8.0).floor() as u32;
            let offset = (c * 1000.0).floor() as u64;
            Built {
                target: base.pow(power) + offset,
                explanation: format!(
                    "This number is based on geometric progression: {base}^{power} with variations"
                ),
            }
        }
        Pattern::FactorialApproximations => {
            let i = ladder(c, FACTORIALS.len());
            let variation = (c * 500.0).floor() as u64;
            Built {
                target: FACTORIALS[i] + variation,
                explanation: format!(
                    "This number is close to {}! (factorial) with modifications",
                    i + 1
                ),
            }
        }
        Pattern::MathematicalConstants => {
            let (name, digits) = CONSTANTS[stoch::pick(rng, CONSTANTS.len())];
            let len = ((3.0 + c * 8.0).floor() as usize).min(digits.len());
            let target = digits[..len].parse::<u64>().unwrap_or(1);
            Built {
                target,
                explanation: format!(
                    "This represents digits from the mathematical constant {name}"
                ),
            }
        }
        Pattern::Dynamic => {
            let magnitude = 10f64.powf(1.0 + c * 6.0).floor();
            let factor = stoch::uniform(rng, 0.1, 1.0);
            Built {
                target: (magnitude * factor).floor() as u64,
                explanation: "A dynamically generated challenge based on your current skill level"
                    .to_string(),
            }
        }
    };
    Built { target: built.target.max(1), ..built }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_prng::WyRand;
    use rand_core::SeedableRng;

    fn rng() -> WyRand {
        WyRand::from_seed(42u64.to_le_bytes())
    }

    #[test]
    fn metadata_table_lines_up_with_variants() {
        for p in Pattern::ALL {
            let s = p.tuning();
            assert!((0.0..=1.0).contains(&s.complexity), "{p}");
        }
        assert_eq!(Pattern::PowersOfTen.tuning().weight, 1.0);
        assert_eq!(Pattern::MathematicalConstants.tuning().complexity, 1.0);
        assert_eq!(Pattern::Dynamic.tuning().weight, 0.0);
    }

    #[test]
    fn labels_and_ids() {
        assert_eq!(Pattern::PowersOfTen.id(), "powers_of_ten");
        assert_eq!(Pattern::FactorialApproximations.label(), "factorial approximations");
        assert_eq!(Pattern::PrimeSums.to_string(), "prime_sums");
    }

    #[test]
    fn difficulty_steps() {
        assert_eq!(Difficulty::from_complexity(0.0), Difficulty::Easy);
        assert_eq!(Difficulty::from_complexity(0.29), Difficulty::Easy);
        assert_eq!(Difficulty::from_complexity(0.3), Difficulty::Medium);
        assert_eq!(Difficulty::from_complexity(0.6), Difficulty::Hard);
        assert_eq!(Difficulty::from_complexity(0.8), Difficulty::Expert);
        assert_eq!(Difficulty::Medium.time_limit_secs(), 90);
    }

    #[test]
    fn powers_of_ten_ladder() {
        assert_eq!(build_target(Pattern::PowersOfTen, 0.0, &mut rng()).target, 1);
        // c = 0.5 → base index 4 (1001), multiplier index 3 (1000)
        assert_eq!(build_target(Pattern::PowersOfTen, 0.5, &mut rng()).target, 1_001_000);
        assert_eq!(build_target(Pattern::PowersOfTen, 1.0, &mut rng()).target, 1_111_000_000);
    }

    #[test]
    fn palindromes_bias_small() {
        assert_eq!(build_target(Pattern::Palindromes, 0.0, &mut rng()).target, 11);
        // 0.5² · 27 = 6.75 → index 6
        assert_eq!(build_target(Pattern::Palindromes, 0.5, &mut rng()).target, 151);
        assert_eq!(build_target(Pattern::Palindromes, 1.0, &mut rng()).target, 12221);
    }

    #[test]
    fn geometric_and_factorial_rules() {
        // base 2, power 1, offset 0
        assert_eq!(build_target(Pattern::GeometricSequences, 0.0, &mut rng()).target, 2);
        // index clamps to 11 at the top end: 11^9 + 1000
        assert_eq!(
            build_target(Pattern::GeometricSequences, 1.0, &mut rng()).target,
            11u64.pow(9) + 1000
        );
        let f = build_target(Pattern::FactorialApproximations, 0.5, &mut rng());
        assert_eq!(f.target, 120 + 250);
        assert!(f.explanation.contains("5!"));
    }

    #[test]
    fn constants_take_a_digit_prefix() {
        let b = build_target(Pattern::MathematicalConstants, 0.0, &mut rng());
        assert!([314, 271, 161, 141].contains(&b.target), "{}", b.target);
        let b = build_target(Pattern::MathematicalConstants, 1.0, &mut rng());
        assert_eq!(b.target.to_string().len(), 11);
    }

    #[test]
    fn random_rules_stay_in_range() {
        let mut r = rng();
        for _ in 0..200 {
            let p = build_target(Pattern::PrimeSums, 0.0, &mut r).target;
            // two primes from the first ten, multiplier 1
            assert!((4..=58).contains(&p), "{p}");
            let d = build_target(Pattern::Dynamic, 0.0, &mut r).target;
            assert!((1..10).contains(&d), "{d}");
        }
    }
}
