//! The permission model: allowed pages, access checks, ownership
//! categorization.

use parley_types::{PageAccess, UserMetadata};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Static ownership tables partitioning a user's pages into owned and other.
///
/// One consolidated source for tables that historically appeared in several
/// places with drifting values. Email keys are stored lowercased and
/// compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwnershipTables {
    /// email → the page that user owns.
    #[serde(default)]
    pub owner_pages: BTreeMap<String, PageAccess>,
    /// Pages owned by every user that holds them (personal tools).
    #[serde(default)]
    pub always_owned: BTreeSet<PageAccess>,
    /// Per-email extra owned pages for restricted personas.
    #[serde(default)]
    pub overrides: BTreeMap<String, BTreeSet<PageAccess>>,
}

impl Default for OwnershipTables {
    fn default() -> Self {
        let owner_pages = BTreeMap::from([
            ("savar@example.com".to_string(), PageAccess::Savar),
            ("arihant@berkeley.edu".to_string(), PageAccess::Arihant),
            ("srivardhanjalan@gmail.com".to_string(), PageAccess::Srivardhan),
            ("neerajagarwala123@gmail.com".to_string(), PageAccess::Neeraj),
        ]);
        Self {
            owner_pages,
            always_owned: BTreeSet::from([PageAccess::TranscriptAnalyzer]),
            overrides: BTreeMap::new(),
        }
    }
}

/// The configured permission policy.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AccessPolicy {
    /// Pages granted when the metadata blob carries no well-shaped
    /// `allowedPages` field. The default is the empty set (fail closed);
    /// deployments wanting a fallback page set it here explicitly.
    #[serde(default)]
    pub default_pages: BTreeSet<PageAccess>,
    #[serde(default)]
    pub ownership: OwnershipTables,
}

/// Exact partition of a user's allowed pages.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct PageCategories {
    pub owned: BTreeSet<PageAccess>,
    pub other: BTreeSet<PageAccess>,
}

impl AccessPolicy {
    /// The pages the user may open.
    ///
    /// Returns the metadata's `allowedPages` when present and well-shaped,
    /// otherwise the configured default set. Never panics on malformed
    /// metadata — that is handled at parse time.
    pub fn allowed_pages(&self, metadata: &UserMetadata) -> BTreeSet<PageAccess> {
        match &metadata.allowed_pages {
            Some(pages) => pages.iter().copied().collect(),
            None => self.default_pages.clone(),
        }
    }

    /// Whether the user may open `page`.
    pub fn has_page_access(&self, metadata: &UserMetadata, page: PageAccess) -> bool {
        self.allowed_pages(metadata).contains(&page)
    }

    /// Partitions the user's allowed pages into owned and other.
    ///
    /// A page is owned iff it equals the email's mapped page, or is in the
    /// always-owned set, or is in that email's override set. With no email
    /// everything is other; an unknown email yields an empty owned set
    /// unless an always-owned page is held.
    pub fn categorize(&self, metadata: &UserMetadata, email: Option<&str>) -> PageCategories {
        let allowed = self.allowed_pages(metadata);
        let Some(email) = email else {
            return PageCategories {
                owned: BTreeSet::new(),
                other: allowed,
            };
        };
        let email = email.to_lowercase();

        let mapped = self.ownership.owner_pages.get(&email).copied();
        let empty = BTreeSet::new();
        let overridden = self.ownership.overrides.get(&email).unwrap_or(&empty);

        let mut categories = PageCategories::default();
        for page in allowed {
            let owned = mapped == Some(page)
                || self.ownership.always_owned.contains(&page)
                || overridden.contains(&page);
            if owned {
                categories.owned.insert(page);
            } else {
                categories.other.insert(page);
            }
        }
        categories
    }
}
