use std::time::Duration;

/// Fill percentage after `elapsed` of a `duration_ms` animation.
///
/// Capped at 100. A non-positive or non-finite duration is already complete.
pub fn fill_percent(elapsed: Duration, duration_ms: f64) -> f64 {
    if !duration_ms.is_finite() || duration_ms <= 0.0 {
        return 100.0;
    }
    let elapsed_ms = elapsed.as_nanos() as f64 / 1_000_000.0;
    (elapsed_ms * 100.0 / duration_ms).min(100.0)
}
