//! Validated user metadata, parsed at the identity-provider boundary.
//!
//! The provider stores an opaque per-user key/value blob. Instead of probing
//! that blob with ad-hoc shape checks at every call site, it is parsed once
//! into a [`UserMetadata`] record; a malformed blob degrades to the default
//! record and never produces an error.

use crate::PageAccess;
use serde::Serialize;
use serde_json::Value;

fn default_version() -> u32 {
    1
}

/// The application's view of the identity provider's metadata blob.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserMetadata {
    /// Schema version of the stored blob. Currently always 1.
    pub version: u32,
    /// Pages the user may open. `None` means the stored blob carried no
    /// well-shaped `allowedPages` field; callers substitute their configured
    /// default in that case.
    #[serde(rename = "allowedPages", skip_serializing_if = "Option::is_none")]
    pub allowed_pages: Option<Vec<PageAccess>>,
    /// The user's personal voice-agent id on the external platform.
    #[serde(rename = "agentId", skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    /// Display name override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Default for UserMetadata {
    fn default() -> Self {
        Self {
            version: default_version(),
            allowed_pages: None,
            agent_id: None,
            name: None,
        }
    }
}

impl UserMetadata {
    /// Parses a raw metadata blob.
    ///
    /// Never fails: a missing or malformed blob yields the default record,
    /// and unknown page strings inside `allowedPages` are dropped rather
    /// than rejected. An `allowedPages` field that is not an array counts
    /// as absent.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let version = obj
            .get("version")
            .and_then(Value::as_u64)
            .map(|v| v as u32)
            .unwrap_or_else(default_version);

        let allowed_pages = obj.get("allowedPages").and_then(Value::as_array).map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .filter_map(PageAccess::parse)
                .collect()
        });

        let agent_id = obj
            .get("agentId")
            .and_then(Value::as_str)
            .map(str::to_string);
        let name = obj.get("name").and_then(Value::as_str).map(str::to_string);

        Self {
            version,
            allowed_pages,
            agent_id,
            name,
        }
    }

    /// Serializes this record back into the provider's blob shape.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// A partial metadata update, merged field-by-field onto the stored record.
///
/// The merge is read-full / merge-field / write-full through the provider's
/// update API: last writer wins, and concurrent writers can silently drop
/// one another's change.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct MetadataPatch {
    #[serde(rename = "allowedPages")]
    pub allowed_pages: Option<Vec<PageAccess>>,
    #[serde(rename = "agentId")]
    pub agent_id: Option<String>,
    pub name: Option<String>,
}

impl MetadataPatch {
    /// Applies this patch to a parsed record, leaving unset fields untouched.
    pub fn apply(&self, current: &UserMetadata) -> UserMetadata {
        UserMetadata {
            version: current.version,
            allowed_pages: self
                .allowed_pages
                .clone()
                .or_else(|| current.allowed_pages.clone()),
            agent_id: self.agent_id.clone().or_else(|| current.agent_id.clone()),
            name: self.name.clone().or_else(|| current.name.clone()),
        }
    }
}
