//! Upstream API dialect detection and document topology helpers.
//!
//! The two known worldstate sources disagree on topology: one wraps each
//! category in `{ time, data: [...] }` and prefers plural keys with
//! epoch-second timestamps, the other exposes bare objects/arrays with
//! singular keys and ISO-8601 timestamps. The dialect is probed once per
//! fetched document; field-name differences inside entries are absorbed
//! by the raw decode structs in `models`.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Known upstream worldstate API variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiDialect {
    /// api.tenno.tools: plural category keys, `{time, data}` wrappers,
    /// epoch-second timestamps.
    TennoTools,
    /// api.warframestat.us: singular category keys, bare payloads,
    /// ISO-8601 timestamps.
    WarframeStat,
}

/// Categories probed for the `{time, data}` wrapper during detection.
const WRAPPER_SENTINELS: &[&str] = &["fissures", "sorties", "invasions", "voidtraders", "arbitrations"];

impl ApiDialect {
    /// Probes a fetched document for the wrapped-payload topology. Runs once
    /// per document; the result is carried alongside the cached data.
    pub fn detect(document: &Value) -> ApiDialect {
        for key in WRAPPER_SENTINELS {
            if let Some(candidate) = document.get(*key) {
                if candidate.get("data").is_some() && candidate.get("time").is_some() {
                    return ApiDialect::TennoTools;
                }
            }
        }
        ApiDialect::WarframeStat
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiDialect::TennoTools => "tenno-tools",
            ApiDialect::WarframeStat => "warframestat",
        }
    }
}

/// Looks a category up under an ordered list of known key aliases.
pub(crate) fn category<'a>(document: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .find_map(|key| document.get(*key))
        .filter(|value| !value.is_null())
}

/// Strips the `{time, data}` wrapper, returning the inner payload untouched
/// for bare values.
pub(crate) fn payload<'a>(value: &'a Value) -> &'a Value {
    match value.get("data") {
        Some(inner) if value.get("time").is_some() => inner,
        _ => value,
    }
}

/// Coerces a category value into a list of entries: a bare or wrapped array
/// passes through; a keyed object contributes its values, filtered to those
/// carrying a node/location identity.
pub(crate) fn entries(value: &Value) -> Vec<&Value> {
    let inner = payload(value);
    match inner {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map
            .values()
            .filter(|entry| entry.get("node").is_some() || entry.get("location").is_some())
            .collect(),
        _ => Vec::new(),
    }
}

/// Coerces a category value into a single record: wrapped/bare arrays yield
/// their first entry, a bare object is the record itself.
pub(crate) fn first_entry<'a>(value: &'a Value) -> Option<&'a Value> {
    match payload(value) {
        Value::Array(items) => items.first(),
        inner @ Value::Object(_) => Some(inner),
        _ => None,
    }
}

/// Raw timestamp as either dialect emits it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawInstant {
    Epoch(i64),
    Iso(String),
}

impl RawInstant {
    /// Resolves to an absolute UTC instant. Epoch values are taken as
    /// seconds unless they are large enough to only make sense as
    /// milliseconds; ISO strings must be RFC 3339.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            RawInstant::Epoch(n) => {
                let millis = if n.abs() >= 1_000_000_000_000 { *n } else { n.checked_mul(1000)? };
                DateTime::from_timestamp_millis(millis)
            }
            RawInstant::Iso(text) => DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

/// Resolves the first of two optional raw timestamps, for `activation`/`start`
/// style pairs that never appear together.
pub(crate) fn instant(primary: &Option<RawInstant>, secondary: &Option<RawInstant>) -> Option<DateTime<Utc>> {
    primary
        .as_ref()
        .or(secondary.as_ref())
        .and_then(RawInstant::to_utc)
}

#[cfg(test)]
mod tests {
    use super::{category, entries, first_entry, payload, ApiDialect, RawInstant};
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn detect_flags_wrapped_documents() {
        let wrapped = json!({ "fissures": { "time": 1_700_000_000, "data": [] } });
        assert_eq!(ApiDialect::detect(&wrapped), ApiDialect::TennoTools);

        let bare = json!({ "fissures": [] });
        assert_eq!(ApiDialect::detect(&bare), ApiDialect::WarframeStat);

        let empty = json!({});
        assert_eq!(ApiDialect::detect(&empty), ApiDialect::WarframeStat);
    }

    #[test]
    fn category_probe_respects_alias_order() {
        let document = json!({ "sortie": { "boss": "old" }, "sorties": { "boss": "new" } });
        let found = category(&document, &["sorties", "sortie"]).expect("category present");
        assert_eq!(found["boss"].as_str(), Some("new"));
    }

    #[test]
    fn category_probe_skips_null_values() {
        let document = json!({ "arbitrations": null });
        assert!(category(&document, &["arbitrations", "arbitration"]).is_none());
    }

    #[test]
    fn payload_unwraps_only_the_wrapper_shape() {
        let wrapped = json!({ "time": 1, "data": [1, 2] });
        assert_eq!(payload(&wrapped), &json!([1, 2]));

        // `data` without `time` is an ordinary field, not the wrapper.
        let plain = json!({ "data": "field" });
        assert_eq!(payload(&plain), &plain);
    }

    #[test]
    fn entries_filters_object_values_without_identity() {
        let keyed = json!({
            "a": { "node": "Apollo (Lua)" },
            "b": { "tier": "Axi" },
            "c": { "location": "Olympus (Mars)" }
        });
        let found = entries(&keyed);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn first_entry_handles_array_object_and_scalar() {
        assert_eq!(
            first_entry(&json!([{ "boss": "Kela" }])).and_then(|v| v["boss"].as_str()),
            Some("Kela")
        );
        assert!(first_entry(&json!({ "boss": "Kela" })).is_some());
        assert!(first_entry(&json!("sortie")).is_none());
    }

    #[test]
    fn raw_instant_resolves_both_units_and_iso() {
        let expected = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
        assert_eq!(RawInstant::Epoch(1_700_000_000).to_utc(), Some(expected));
        assert_eq!(RawInstant::Epoch(1_700_000_000_000).to_utc(), Some(expected));
        assert_eq!(
            RawInstant::Iso("2023-11-14T22:13:20Z".to_string()).to_utc(),
            Some(expected)
        );
        assert_eq!(RawInstant::Iso("not-a-date".to_string()).to_utc(), None);
    }
}
