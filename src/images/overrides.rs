//! Override map parsing and the bundled baseline config.

use std::collections::BTreeMap;

/// Slot key to image URL.
pub type OverrideMap = BTreeMap<String, String>;

/// Baseline config shipped with the build.
const BASELINE_JSON: &str = include_str!("../../config/site_config.json");

/// Whether a stored value should be treated as absent.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Get the value for `key` unless it is missing or blank.
pub fn non_blank<'a>(map: &'a OverrideMap, key: &str) -> Option<&'a str> {
    map.get(key)
        .map(String::as_str)
        .filter(|value| !is_blank(value))
}

/// Parse a JSON object of string values.
///
/// Non-string values are dropped. Anything that isn't a JSON object is
/// reported as `None` so callers can log it and fall through.
pub fn parse_override_map(json: &str) -> Option<OverrideMap> {
    let value: serde_json::Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Ignoring malformed override map: {}", e);
            return None;
        }
    };

    let serde_json::Value::Object(entries) = value else {
        log::warn!("Ignoring override map: expected a JSON object");
        return None;
    };

    let map = entries
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(url) => Some((key, url)),
            other => {
                log::debug!("Dropping non-string override for '{}': {}", key, other);
                None
            }
        })
        .collect();

    Some(map)
}

/// The deployed default image set.
pub fn baseline_config() -> OverrideMap {
    parse_override_map(BASELINE_JSON).unwrap_or_default()
}

/// Overlay `edits` on `base`; edits win, blank edits included.
pub fn merge(base: &OverrideMap, edits: &OverrideMap) -> OverrideMap {
    let mut merged = base.clone();
    merged.extend(edits.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Count entries with a non-blank value.
pub fn count_non_blank(map: &OverrideMap) -> usize {
    map.values().filter(|value| !is_blank(value)).count()
}
