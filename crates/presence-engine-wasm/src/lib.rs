//! WASM bindings for presence-engine.
//!
//! Exposes the availability oracle, the contact gate and the now-playing
//! selector to the homepage's JavaScript via `wasm-bindgen`. Complex values are
//! passed back as JSON strings; errors become string `JsValue`s.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p presence-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir assets/js/wasm/ \
//!   target/wasm32-unknown-unknown/release/presence_engine_wasm.wasm
//! ```
//!
//! The page polls `currentStatus` once per second with `new Date().toISOString()`.

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use presence_engine::easter::{easter_date, FIRST_GREGORIAN_YEAR};
use presence_engine::{AvailabilityOracle, OracleConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 (what `Date.prototype.toISOString` produces) and naive
/// "YYYY-MM-DDTHH:MM:SS", which is interpreted as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

/// Build a validated config, defaulting to +3 hours when `offset_hours` is absent.
fn config_for(offset_hours: Option<u32>) -> Result<OracleConfig, JsValue> {
    let config = offset_hours
        .map(|utc_offset_hours| OracleConfig { utc_offset_hours })
        .unwrap_or_default();
    config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(config)
}

fn oracle_for(now: DateTime<Utc>, offset_hours: Option<u32>) -> Result<AvailabilityOracle, JsValue> {
    let config = config_for(offset_hours)?;
    AvailabilityOracle::for_timestamp(now, config).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Status for an instant.
///
/// Returns a JSON object `{is_holiday, holiday_name?, message, do_not_disturb}`.
/// The oracle is built for the UTC year of `now`, so Easter is always current.
///
/// # Arguments
/// - `now` -- ISO 8601 timestamp (e.g., "2025-12-25T12:00:00.000Z")
/// - `offset_hours` -- Optional hour offset (defaults to +3)
#[wasm_bindgen(js_name = "currentStatus")]
pub fn current_status(now: &str, offset_hours: Option<u32>) -> Result<String, JsValue> {
    let now = parse_datetime(now)?;
    let oracle = oracle_for(now, offset_hours)?;
    to_json(&oracle.current_status(now))
}

/// Easter Sunday as "YYYY-MM-DD".
#[wasm_bindgen(js_name = "easterSunday")]
pub fn easter_sunday(year: i32) -> Result<String, JsValue> {
    easter_date(year)
        .map(|date| date.to_string())
        .ok_or_else(|| {
            JsValue::from_str(&format!(
                "Year {} is outside the Gregorian computus (use {} or later)",
                year, FIRST_GREGORIAN_YEAR
            ))
        })
}

/// The merged holiday table for a year as a JSON array of
/// `{date, name, kind}` objects.
#[wasm_bindgen(js_name = "holidays")]
pub fn holidays(year: i32) -> Result<String, JsValue> {
    let oracle = AvailabilityOracle::new(year).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let entries: Vec<_> = oracle.holidays().iter().collect();
    to_json(&entries)
}

/// Whether a contact click at `now` should go through.
///
/// Returns `{"decision":"allowed"}` or
/// `{"decision":"blocked","notice":{text,is_error,duration_ms}}`.
#[wasm_bindgen(js_name = "contactDecision")]
pub fn contact_decision(now: &str, offset_hours: Option<u32>) -> Result<String, JsValue> {
    let now = parse_datetime(now)?;
    let oracle = oracle_for(now, offset_hours)?;
    to_json(&oracle.contact_gate().check(now))
}

/// The now-playing line for `now`, with the song drawn from a seeded RNG.
///
/// The page passes a fresh seed (e.g. `Date.now()`) on each refresh.
///
/// # Arguments
/// - `now` -- ISO 8601 timestamp
/// - `seed` -- RNG seed for the song pick
/// - `offset_hours` -- Optional hour offset (defaults to +3)
#[wasm_bindgen(js_name = "nowPlaying")]
pub fn now_playing(now: &str, seed: u64, offset_hours: Option<u32>) -> Result<String, JsValue> {
    let now = parse_datetime(now)?;
    let config = config_for(offset_hours)?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(presence_engine::now_playing(now, &config, &mut rng).to_string())
}

/// Current UTC year, for the page footer.
#[wasm_bindgen(js_name = "yearOf")]
pub fn year_of(now: &str) -> Result<i32, JsValue> {
    parse_datetime(now).map(|dt| dt.year())
}
