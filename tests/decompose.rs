// tests/decompose.rs
use sum_challenge::mechanics::decompose::{self, DENOMINATIONS, PathStep};

#[test]
fn counts_match_hand_simulation() {
    assert_eq!(decompose::count(0), 0);
    assert_eq!(decompose::count(23), 5);
    assert_eq!(decompose::count(100), 1);
    assert_eq!(decompose::count(111), 3);
    assert_eq!(decompose::count(1111), 4);
    assert_eq!(decompose::count(12_345_678), 36);
}

#[test]
fn above_the_top_button_repeats_it() {
    // 3 × 1e7 + 1
    assert_eq!(decompose::count(30_000_001), 4);
    let path = decompose::full_path(30_000_001);
    assert_eq!(
        path,
        vec![
            PathStep { count: 3, denomination: 10_000_000 },
            PathStep { count: 1, denomination: 1 },
        ]
    );
}

#[test]
fn suggestion_keeps_three_largest_steps() {
    let path = decompose::suggest_path(1_234);
    assert_eq!(path.len(), 3);
    assert_eq!(decompose::format_path(&path), "1×(+1000) + 2×(+100) + 3×(+10)");
    assert!(decompose::suggest_path(0).is_empty());
}

#[test]
fn full_path_sums_back_to_target() {
    for t in [1u64, 9, 10, 99, 1_001, 987_654, 10_000_000, 99_999_999] {
        let path = decompose::full_path(t);
        let sum: u64 = path.iter().map(|s| s.count * s.denomination).sum();
        let clicks: u64 = path.iter().map(|s| s.count).sum();
        assert_eq!(sum, t);
        assert_eq!(clicks, decompose::count(t));
    }
}

#[test]
fn only_powers_of_ten_are_buttons() {
    for d in DENOMINATIONS {
        assert!(decompose::is_denomination(d));
    }
    for v in [0u64, 2, 5, 11, 50, 100_000_000] {
        assert!(!decompose::is_denomination(v), "{v}");
    }
}
