/// ACM Engine: Arithmetic Primitives
///
/// All monetary values and day counts are i64.
/// Products of ~10^9 fields stay inside i64; anything beyond is a hard fail.

/// Checked integer addition. Panics on i64 overflow.
pub fn checked_add(a: i64, b: i64) -> i64 {
    match a.checked_add(b) {
        Some(result) => result,
        None => panic!("Overflow: {} + {} overflows i64", a, b),
    }
}

/// Checked integer subtraction. Panics on i64 overflow.
pub fn checked_sub(a: i64, b: i64) -> i64 {
    match a.checked_sub(b) {
        Some(result) => result,
        None => panic!("Overflow: {} - {} overflows i64", a, b),
    }
}

/// Checked integer multiplication. Panics on i64 overflow.
pub fn checked_mul(a: i64, b: i64) -> i64 {
    match a.checked_mul(b) {
        Some(result) => result,
        None => panic!("Overflow: {} * {} overflows i64", a, b),
    }
}

/// `ceil(horizon_days / 2)`, the most acquisitions a horizon can hold.
/// Negative horizons clamp to zero.
pub fn half_horizon(horizon_days: i64) -> i64 {
    (horizon_days.max(0) + 1) / 2
}
