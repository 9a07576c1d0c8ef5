//! Option parsing and normalization.
//!
//! Users hand rendering options over as either a query string
//! (`username=alice&show_icons=true`) or a JSON object literal. Both forms end
//! up as an [`Options`] mapping whose values are plain strings.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::error::ActionError;

/// Canonical option name to option value mapping handed to renderers.
pub type Options = BTreeMap<String, String>;

/// Shape of an option value before normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawOptionValue {
    /// `null`; the key is dropped.
    Absent,
    /// Joined with commas, order preserved.
    Sequence(Vec<Value>),
    /// Anything else, rendered as a string.
    Scalar(Value),
}

impl RawOptionValue {
    fn into_string(self) -> Option<String> {
        match self {
            RawOptionValue::Absent => None,
            RawOptionValue::Sequence(items) => Some(join_values(&items)),
            RawOptionValue::Scalar(value) => Some(scalar_to_string(&value)),
        }
    }
}

impl From<String> for RawOptionValue {
    fn from(value: String) -> Self {
        RawOptionValue::Scalar(Value::String(value))
    }
}

/// Parse a raw options string (query string or JSON object) into [`Options`].
///
/// Absent or blank input yields an empty mapping.
pub fn parse_options(value: Option<&str>) -> Result<Options, ActionError> {
    let Some(value) = value else {
        return Ok(Options::new());
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(Options::new());
    }

    let raw = if trimmed.starts_with('{') {
        serde_json::from_str::<BTreeMap<String, RawOptionValue>>(trimmed)
            .map_err(ActionError::Parse)?
    } else {
        // One `?` is the query marker; form decoding drops one more.
        let query = trimmed.strip_prefix('?').unwrap_or(trimmed);
        let query = query.strip_prefix('?').unwrap_or(query);
        parse_query(query)
            .into_iter()
            .map(|(key, val)| (key, RawOptionValue::from(val)))
            .collect()
    };

    Ok(normalize_options(raw))
}

/// Collapse heterogeneous option values into plain strings, dropping absent ones.
pub fn normalize_options<I>(options: I) -> Options
where
    I: IntoIterator<Item = (String, RawOptionValue)>,
{
    options
        .into_iter()
        .filter_map(|(key, value)| value.into_string().map(|v| (key, v)))
        .collect()
}

/// Decode `key=value&...` pairs, merging repeated keys with commas.
fn parse_query(query: &str) -> BTreeMap<String, String> {
    let mut merged: BTreeMap<String, String> = BTreeMap::new();
    for segment in query.split('&') {
        if segment.is_empty() {
            continue;
        }
        let (key, val) = segment.split_once('=').unwrap_or((segment, ""));
        let key = decode_component(key);
        let val = decode_component(val);
        match merged.get_mut(&key) {
            Some(existing) if !existing.is_empty() => {
                existing.push(',');
                existing.push_str(&val);
            }
            _ => {
                merged.insert(key, val);
            }
        }
    }
    merged
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::Array(items) => join_values(items),
        Value::Object(_) => value.to_string(),
    }
}

/// Whole-valued floats within the exactly representable integer range drop
/// their fractional part, so `1.0` and `1e2` read as `1` and `100`.
fn number_to_string(n: &Number) -> String {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{f:.0}")
            }
        }
        _ => n.to_string(),
    }
}

fn join_values(items: &[Value]) -> String {
    items
        .iter()
        .map(scalar_to_string)
        .collect::<Vec<_>>()
        .join(",")
}
