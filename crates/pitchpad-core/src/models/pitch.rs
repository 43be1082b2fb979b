//! Pitch idea model
//!
//! Wire format is the camelCase JSON owned by the remote pitch store. Records
//! are created and mutated only by the store; this crate reads them.

use serde::{Deserialize, Serialize};

/// Fallback shown when a record has no resolvable startup name.
pub const UNTITLED_DESIGN: &str = "Untitled Design";

/// Creation timestamp as the store serializes it.
///
/// The same logical value reaches us through two serialization paths: a live
/// structured timestamp exposing `seconds`, or a plain-object snapshot
/// exposing `_seconds`. Variant order fixes the precedence when a payload
/// carries both field names. Anything else is kept as [`CreatedAt::Other`] so
/// the display path can distinguish "present but unrecognized" from "absent".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedAt {
    /// Live structured timestamp, e.g. `{"seconds": 1700000000, "nanoseconds": 0}`
    Timestamp { seconds: i64 },
    /// Plain-object snapshot, e.g. `{"_seconds": 1700000000, "_nanoseconds": 0}`
    Snapshot {
        #[serde(rename = "_seconds")]
        seconds: i64,
    },
    /// Present but not recognized as a timestamp
    Other(serde_json::Value),
}

impl CreatedAt {
    /// Resolve the epoch-seconds value, if the shape is recognized.
    #[must_use]
    pub const fn seconds(&self) -> Option<i64> {
        match self {
            Self::Timestamp { seconds } | Self::Snapshot { seconds } => Some(*seconds),
            Self::Other(_) => None,
        }
    }

    /// Epoch-seconds sort key; unresolved timestamps sort as oldest possible.
    #[must_use]
    pub const fn sort_seconds(&self) -> i64 {
        match self.seconds() {
            Some(seconds) => seconds,
            None => 0,
        }
    }
}

/// Generated website summary attached to a saved design.
///
/// Partially populated for older records, so every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedWebsite {
    #[serde(default)]
    pub startup_name: Option<String>,
}

/// A saved pitch idea ("design") owned by the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchIdea {
    /// Opaque identifier assigned by the store
    pub id: String,
    /// Free-text description of the original idea
    #[serde(default)]
    pub idea_description: String,
    /// Generated website summary, absent for some records
    #[serde(default)]
    pub generated_website: Option<GeneratedWebsite>,
    /// Creation timestamp, absent or malformed for some records
    #[serde(default)]
    pub created_at: Option<CreatedAt>,
}

impl PitchIdea {
    /// Display name for the card title, with the untitled fallback.
    ///
    /// Empty names count as missing, mirroring the store's own UI.
    #[must_use]
    pub fn startup_name(&self) -> &str {
        self.generated_website
            .as_ref()
            .and_then(|site| site.startup_name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNTITLED_DESIGN)
    }

    /// Human-readable creation date for the card.
    ///
    /// An absent field and a present-but-unrecognized field are distinct
    /// failure labels.
    #[must_use]
    pub fn created_label(&self) -> String {
        let Some(created_at) = &self.created_at else {
            return "Date not available".to_string();
        };
        created_at
            .seconds()
            .and_then(|seconds| chrono::DateTime::from_timestamp(seconds, 0))
            .map_or_else(
                || "Invalid date".to_string(),
                |date| date.format("%B %-d, %Y").to_string(),
            )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(json: &str) -> PitchIdea {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn deserializes_live_timestamp_shape() {
        let pitch = parse(r#"{"id":"a","createdAt":{"seconds":100,"nanoseconds":5}}"#);
        assert_eq!(pitch.created_at.unwrap().seconds(), Some(100));
    }

    #[test]
    fn deserializes_snapshot_timestamp_shape() {
        let pitch = parse(r#"{"id":"a","createdAt":{"_seconds":200,"_nanoseconds":0}}"#);
        assert_eq!(pitch.created_at.unwrap().seconds(), Some(200));
    }

    #[test]
    fn live_shape_wins_when_both_field_names_present() {
        let pitch = parse(r#"{"id":"a","createdAt":{"seconds":100,"_seconds":200}}"#);
        assert_eq!(pitch.created_at.unwrap().seconds(), Some(100));
    }

    #[test]
    fn null_timestamp_deserializes_as_absent() {
        let pitch = parse(r#"{"id":"a","createdAt":null}"#);
        assert_eq!(pitch.created_at, None);
    }

    #[test]
    fn unrecognized_timestamp_is_kept_as_other() {
        let pitch = parse(r#"{"id":"a","createdAt":{"seconds":"soon"}}"#);
        let created_at = pitch.created_at.unwrap();
        assert_eq!(created_at.seconds(), None);
        assert_eq!(created_at.sort_seconds(), 0);
    }

    #[test]
    fn startup_name_falls_back_when_website_missing() {
        let pitch = parse(r#"{"id":"a"}"#);
        assert_eq!(pitch.startup_name(), UNTITLED_DESIGN);
    }

    #[test]
    fn startup_name_falls_back_when_name_empty() {
        let pitch = parse(r#"{"id":"a","generatedWebsite":{"startupName":""}}"#);
        assert_eq!(pitch.startup_name(), UNTITLED_DESIGN);
    }

    #[test]
    fn startup_name_uses_generated_name() {
        let pitch = parse(r#"{"id":"a","generatedWebsite":{"startupName":"Acme"}}"#);
        assert_eq!(pitch.startup_name(), "Acme");
    }

    #[test]
    fn created_label_formats_resolved_epoch() {
        let pitch = parse(r#"{"id":"a","createdAt":{"seconds":1700000000}}"#);
        assert_eq!(pitch.created_label(), "November 14, 2023");
    }

    #[test]
    fn created_label_distinguishes_missing_from_invalid() {
        let missing = parse(r#"{"id":"a"}"#);
        assert_eq!(missing.created_label(), "Date not available");

        let invalid = parse(r#"{"id":"a","createdAt":"yesterday"}"#);
        assert_eq!(invalid.created_label(), "Invalid date");
    }
}
