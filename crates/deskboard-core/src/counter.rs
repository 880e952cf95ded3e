//! Stat-counter targets and the count-up animation math.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterTargetError {
    #[error("counter target {0:?} is not numeric")]
    NotNumeric(String),
    #[error("counter target {0:?} is not a finite number")]
    NotFinite(String),
}

/// Parsed animation target: the numeric value plus the literal suffix
/// recovered from the placeholder text (e.g. "%" or "h").
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTarget {
    pub value: f64,
    pub decimal: bool,
    pub suffix: String,
}

fn numeric_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?$").expect("static pattern"))
}

fn digit_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9.]").expect("static pattern"))
}

/// Validate a declared target against the placeholder text it animates into.
/// The suffix is whatever remains of the placeholder once digits and dots are
/// stripped, so "0.0h" yields "h" and "0%" yields "%".
pub fn parse_target(raw: &str, initial_text: &str) -> Result<CounterTarget, CounterTargetError> {
    let trimmed = raw.trim();
    if !numeric_pattern().is_match(trimmed) {
        return Err(CounterTargetError::NotNumeric(raw.to_string()));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CounterTargetError::NotNumeric(raw.to_string()))?;
    if !value.is_finite() {
        return Err(CounterTargetError::NotFinite(raw.to_string()));
    }
    let suffix = digit_pattern().replace_all(initial_text, "").into_owned();
    Ok(CounterTarget {
        value,
        decimal: value.fract() != 0.0,
        suffix,
    })
}

/// Quartic ease-out. Fast start, long settle into the target.
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Linear progress of an animation that started at `started_ms`, clamped to
/// `[0, 1]`. A zero duration completes immediately.
pub fn progress(started_ms: u64, now_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    let elapsed = now_ms.saturating_sub(started_ms);
    (elapsed as f64 / duration_ms as f64).min(1.0)
}

/// Text shown while the animation is in flight. Decimal targets keep one
/// fractional digit; integer targets truncate. At full progress the exact
/// target is rendered, never the eased approximation.
pub fn animated_text(target: &CounterTarget, p: f64) -> String {
    if p >= 1.0 {
        return final_text(target);
    }
    let eased = target.value * ease_out_quart(p);
    if target.decimal {
        format!("{:.1}{}", eased, target.suffix)
    } else {
        format!("{}{}", eased.trunc() as i64, target.suffix)
    }
}

pub fn final_text(target: &CounterTarget) -> String {
    if target.decimal {
        format!("{}{}", target.value, target.suffix)
    } else {
        format!("{}{}", target.value.trunc() as i64, target.suffix)
    }
}
