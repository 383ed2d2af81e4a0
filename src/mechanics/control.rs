/// Control mechanics: bounded updates for session-persistent scalars.

/// Additive step: x' = clamp(x + delta). Non-finite results fall back to `lo`.
#[inline]
pub fn nudge(x: f64, delta: f64, lo: f64, hi: f64) -> f64 {
    let next = x + delta;
    if next.is_finite() { next.clamp(lo, hi) } else { lo }
}

/// Clamp into [0, 1]; NaN maps to 0.
#[inline]
pub fn unit(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}
