//! The identity context and the provider trait.

use crate::IdentityError;
use async_trait::async_trait;
use parley_types::{MetadataPatch, UserMetadata};
use serde::Serialize;

/// An authenticated account as resolved from the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    /// Provider-assigned user id.
    pub id: String,
    #[serde(rename = "primaryEmail")]
    pub primary_email: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    /// The user's metadata blob, parsed at the boundary.
    pub metadata: UserMetadata,
}

impl Identity {
    /// Display name with the original fallback chain: metadata name, then
    /// the local part of the primary email.
    pub fn greeting_name(&self) -> Option<String> {
        if let Some(name) = self.metadata.name.as_deref() {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        self.primary_email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .map(str::to_string)
    }
}

/// The explicit three-valued identity context.
///
/// Replaces the provider SDK's `undefined | null | object` sentinels:
/// `Loading` until resolution completes (a single one-shot notification),
/// `Unauthenticated` when resolution yielded no account, `Authenticated`
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum IdentityState {
    Loading,
    Unauthenticated,
    Authenticated(Identity),
}

impl IdentityState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }
}

/// The seam in front of the external identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves a session token to an account.
    ///
    /// `Ok(None)` means the token is unknown or expired (unauthenticated);
    /// errors are reserved for provider/transport failures.
    async fn resolve(&self, token: &str) -> Result<Option<Identity>, IdentityError>;

    /// Applies a partial metadata update for the account behind `token`.
    ///
    /// Implementations read the full stored record, merge the patch, and
    /// write the full record back. The write is last-writer-wins; two
    /// concurrent updates can silently drop one side's change.
    async fn update_metadata(
        &self,
        token: &str,
        patch: &MetadataPatch,
    ) -> Result<UserMetadata, IdentityError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(name: Option<&str>, email: Option<&str>) -> Identity {
        Identity {
            id: "user_1".into(),
            primary_email: email.map(str::to_string),
            display_name: None,
            metadata: UserMetadata {
                name: name.map(str::to_string),
                ..UserMetadata::default()
            },
        }
    }

    #[test]
    fn greeting_prefers_metadata_name() {
        let id = identity(Some("  Ada  "), Some("ada@example.com"));
        assert_eq!(id.greeting_name().as_deref(), Some("Ada"));
    }

    #[test]
    fn greeting_falls_back_to_email_local_part() {
        let id = identity(Some("   "), Some("ada@example.com"));
        assert_eq!(id.greeting_name().as_deref(), Some("ada"));
        let id = identity(None, None);
        assert_eq!(id.greeting_name(), None);
    }

    #[test]
    fn state_identity_accessor() {
        assert!(IdentityState::Loading.identity().is_none());
        assert!(IdentityState::Unauthenticated.identity().is_none());
        let id = identity(None, None);
        assert_eq!(
            IdentityState::Authenticated(id.clone()).identity(),
            Some(&id)
        );
    }
}
