//! Input validation shared by all builder operations.
//!
//! Every check returns a [`SpeechError`] carrying the caller's message, so the
//! error names the parameter and the operation that rejected it. Checks are
//! meant to run in a fixed order: presence, emptiness, allowed values, range.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Result, SpeechError, Value};

/// Strengths accepted by `<break strength='…'/>`
pub const BREAK_STRENGTHS: &[&str] = &["none", "x-weak", "weak", "medium", "strong", "x-strong"];

/// Values accepted by `<say-as interpret-as='…'>`
pub const INTERPRETATIONS: &[&str] = &[
    "characters", "spell-out", "cardinal", "number", "ordinal", "digits",
    "fraction", "unit", "date", "time", "telephone", "address",
    "interjection", "expletive",
];

/// Levels accepted by `<emphasis level='…'>`
pub const EMPHASIS_LEVELS: &[&str] = &["strong", "moderate", "reduced"];

/// Named prosody rates
pub const RATES: &[&str] = &["x-slow", "slow", "medium", "fast", "x-fast"];

/// Named prosody pitches
pub const PITCHES: &[&str] = &["x-low", "low", "medium", "high", "x-high"];

/// Named prosody volumes
pub const VOLUMES: &[&str] = &["silent", "x-soft", "soft", "medium", "loud", "x-loud"];

/// Longest pause in seconds
pub const MAX_PAUSE_SECONDS: f64 = 10.0;

/// Longest pause in milliseconds
pub const MAX_PAUSE_MILLISECONDS: f64 = 10_000.0;

/// Slowest prosody rate, in percent of normal speed
pub const MIN_RATE_PERCENT: f64 = 20.0;

static DURATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)?|\.\d+)(s|ms)$").expect("valid duration pattern"));

static RATE_PERCENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?\d+)%$").expect("valid rate pattern"));

static PITCH_PERCENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]\d+(?:\.\d+)?%$").expect("valid pitch pattern"));

static VOLUME_DECIBELS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]\d+(?:\.\d+)?)db$").expect("valid volume pattern"));

/// Log a rejected input and hand the error back for propagation
pub fn rejected(err: SpeechError) -> SpeechError {
    tracing::debug!(error = %err, "rejected SSML input");
    err
}

fn invalid(msg: impl Into<String>) -> SpeechError {
    rejected(SpeechError::InvalidArgument(msg.into()))
}

/// Fail when no value was supplied
pub fn present(value: &Value<'_>, msg: &str) -> Result<()> {
    if value.is_missing() {
        return Err(invalid(msg));
    }
    Ok(())
}

/// Fail when the value is a zero-length string
pub fn not_empty(value: &Value<'_>, msg: &str) -> Result<()> {
    if value.is_empty_str() {
        return Err(invalid(msg));
    }
    Ok(())
}

/// Normalize `value` (trimmed, lower-cased) and require it to be in `allowed`.
///
/// Returns the normalized value.
pub fn in_list(value: &str, allowed: &[&str], msg: &str) -> Result<String> {
    let normalized = value.trim().to_lowercase();
    if allowed.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(invalid(msg))
    }
}

/// Check a pause duration such as `1s`, `.5s` or `250ms`.
pub fn validate_duration(duration: &str) -> Result<()> {
    let malformed = || {
        invalid(format!(
            "The duration must be a number followed by either 's' for second or 'ms' for \
             milliseconds. e.g., 10s or 100ms. Max duration is 10 seconds (10000 milliseconds). \
             Duration provided: {duration}"
        ))
    };

    let caps = DURATION.captures(duration).ok_or_else(malformed)?;
    let amount: f64 = caps[1].parse().map_err(|_| malformed())?;

    match &caps[2] {
        "s" if amount > MAX_PAUSE_SECONDS => Err(rejected(SpeechError::DurationOutOfRange(format!(
            "The pause duration exceeds the allowed 10 second duration. Duration provided: {duration}"
        )))),
        "ms" if amount > MAX_PAUSE_MILLISECONDS => {
            Err(rejected(SpeechError::DurationOutOfRange(format!(
                "The pause duration exceeds the allowed 10,000 milliseconds duration. \
                 Duration provided: {duration}"
            ))))
        }
        _ => Ok(()),
    }
}

/// Validate a prosody attribute against its named values, falling back to
/// `pattern` for free-form values. `pattern` returns the value to emit, or
/// `None` when it does not recognize the input either.
fn validate_attribute<F>(name: &str, value: &str, allowed: &[&str], pattern: F) -> Result<String>
where
    F: FnOnce(&str) -> Result<Option<String>>,
{
    let normalized = value.trim().to_lowercase();
    if allowed.contains(&normalized.as_str()) {
        return Ok(normalized);
    }

    pattern(&normalized)?.ok_or_else(|| invalid(format!("attributes.{name} is not a valid {name}")))
}

/// Validate a prosody rate: a named rate or a percentage of at least 20%.
pub fn validate_rate(rate: &str) -> Result<String> {
    validate_attribute("rate", rate, RATES, |normalized| {
        let Some(caps) = RATE_PERCENT.captures(normalized) else {
            return Ok(None);
        };
        let percent: f64 = caps[1].parse().map_err(|_| invalid("attributes.rate is not a valid rate"))?;
        if percent < MIN_RATE_PERCENT {
            return Err(rejected(SpeechError::RateOutOfRange(format!(
                "The minimum rate is twenty percentage. Received: {}",
                &caps[1]
            ))));
        }
        Ok(Some(normalized.to_string()))
    })
}

/// Validate a prosody pitch: a named pitch or a signed percentage.
pub fn validate_pitch(pitch: &str) -> Result<String> {
    validate_attribute("pitch", pitch, PITCHES, |normalized| {
        Ok(PITCH_PERCENT
            .is_match(normalized)
            .then(|| normalized.to_string()))
    })
}

/// Validate a prosody volume: a named volume or a signed decibel change,
/// emitted with the unit spelled `dB`.
pub fn validate_volume(volume: &str) -> Result<String> {
    validate_attribute("volume", volume, VOLUMES, |normalized| {
        Ok(VOLUME_DECIBELS
            .captures(normalized)
            .map(|caps| format!("{}dB", &caps[1])))
    })
}
