/// Scoring mechanics: efficiency, time/streak multipliers, experience curve.

/// Efficiency of a correct answer: 1.0 when optimal, else min/used floored at 0.1.
#[inline]
pub fn efficiency(min_clicks: u64, clicks_used: u64) -> f64 {
    if clicks_used == min_clicks {
        return 1.0;
    }
    if clicks_used == 0 {
        return 0.1;
    }
    (min_clicks as f64 / clicks_used as f64).max(0.1)
}

/// Time multiplier: fixed fast bands, then bands relative to the limit.
#[inline]
pub fn time_bonus(elapsed_secs: f64, time_limit_secs: f64) -> f64 {
    if elapsed_secs < 10.0 {
        2.0
    } else if elapsed_secs < 20.0 {
        1.5
    } else if elapsed_secs < time_limit_secs * 0.5 {
        1.2
    } else if elapsed_secs < time_limit_secs * 0.8 {
        1.0
    } else {
        0.8
    }
}

/// Streak multiplier, evaluated on the streak before the current round.
#[inline]
pub fn streak_bonus(streak: u32) -> f64 {
    match streak {
        10.. => 2.5,
        5.. => 2.0,
        3.. => 1.5,
        1.. => 1.2,
        0 => 1.0,
    }
}

/// Exercise-level multiplier: 1 + complexity·0.5 + pattern rating·0.3.
#[inline]
pub fn bonus_multiplier(complexity: f64, pattern_rating: f64) -> f64 {
    1.0 + complexity * 0.5 + pattern_rating * 0.3
}

/// round(base × efficiency × every multiplier).
#[inline]
pub fn points_earned(points_base: u64, efficiency: f64, total_multiplier: f64) -> u64 {
    let raw = points_base as f64 * efficiency * total_multiplier;
    if raw.is_finite() { raw.round().max(0.0) as u64 } else { 0 }
}

/// Experience granted for a scored round.
#[inline]
pub fn experience_for(points: u64) -> u64 {
    (points as f64 / 10.0).round() as u64
}

/// Cumulative experience needed to leave `level`: level·100 + level²·10.
#[inline]
pub fn exp_required(level: u32) -> u64 {
    let l = u64::from(level);
    l * 100 + l * l * 10
}

/// Share of completed exercises solved perfectly, in percent (100 with none).
#[inline]
pub fn overall_efficiency_percent(perfect: u32, total: u32) -> f64 {
    if total == 0 {
        100.0
    } else {
        f64::from(perfect) / f64::from(total) * 100.0
    }
}
