//! The closed set of gated page tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named destination in the application, gated by permission tag.
///
/// Most tags correspond to one voice-agent persona; the rest are tools
/// (`transcript-analyzer`, `legal-assistant`) or the `dashboard`. Tags are
/// opaque and matched by exact equality; there is no hierarchy between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageAccess {
    Savar,
    Arihant,
    Sajjad,
    Neeraj,
    Sasha,
    Aaman,
    Guy,
    Parth,
    Srivardhan,
    TranscriptAnalyzer,
    LegalAssistant,
    Dashboard,
}

impl PageAccess {
    /// All known page tags, in declaration order.
    pub const ALL: [PageAccess; 12] = [
        Self::Savar,
        Self::Arihant,
        Self::Sajjad,
        Self::Neeraj,
        Self::Sasha,
        Self::Aaman,
        Self::Guy,
        Self::Parth,
        Self::Srivardhan,
        Self::TranscriptAnalyzer,
        Self::LegalAssistant,
        Self::Dashboard,
    ];

    /// Returns the wire string for this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Savar => "savar",
            Self::Arihant => "arihant",
            Self::Sajjad => "sajjad",
            Self::Neeraj => "neeraj",
            Self::Sasha => "sasha",
            Self::Aaman => "aaman",
            Self::Guy => "guy",
            Self::Parth => "parth",
            Self::Srivardhan => "srivardhan",
            Self::TranscriptAnalyzer => "transcript-analyzer",
            Self::LegalAssistant => "legal-assistant",
            Self::Dashboard => "dashboard",
        }
    }

    /// Attempts to convert a wire string to a `PageAccess`.
    ///
    /// Returns `None` for strings outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.as_str() == s)
    }
}

impl fmt::Display for PageAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageAccess {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}
