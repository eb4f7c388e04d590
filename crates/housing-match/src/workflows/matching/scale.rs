/// Lowest raw score the rule battery can produce.
pub const MIN_RAW_SCORE: i32 = -12;
/// Highest raw score the rule battery can produce.
pub const MAX_RAW_SCORE: i32 = 17;

/// Map a raw score onto the 1.0-10.0 fit scale, rounded to one decimal.
/// Raw scores outside `MIN_RAW_SCORE..=MAX_RAW_SCORE` are clamped to the scale ends.
pub fn scale_raw_score(raw_score: i32) -> f64 {
    let span = f64::from(MAX_RAW_SCORE - MIN_RAW_SCORE);
    let normalized = f64::from(raw_score - MIN_RAW_SCORE) / span;
    let scaled = (normalized * 9.0 + 1.0).clamp(1.0, 10.0);
    (scaled * 10.0).round() / 10.0
}
