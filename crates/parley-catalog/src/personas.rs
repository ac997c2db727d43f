//! The consolidated persona table.
//!
//! Maps each page tag to its display name and, for agent pages, the
//! platform agent id behind it. Tool pages (`transcript-analyzer`,
//! `legal-assistant`, `dashboard`) carry no agent.

use parley_types::PageAccess;
use serde::Serialize;

/// Display configuration for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonaConfig {
    pub page: PageAccess,
    #[serde(rename = "displayName")]
    pub display_name: &'static str,
    /// Platform agent id; `None` for tool pages.
    #[serde(rename = "agentId", skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<&'static str>,
}

const SAVAR: PersonaConfig = PersonaConfig {
    page: PageAccess::Savar,
    display_name: "Savar",
    agent_id: Some("agent_6501k310pz99fvkts53hqjte6v0p"),
};
const ARIHANT: PersonaConfig = PersonaConfig {
    page: PageAccess::Arihant,
    display_name: "Arihant",
    agent_id: Some("agent_7701k30qqnxces59w2a4tsxaneq9"),
};
const SAJJAD: PersonaConfig = PersonaConfig {
    page: PageAccess::Sajjad,
    display_name: "Sajjad",
    agent_id: Some("agent_0301k2tznxawhz0wfz8amcfyktx5"),
};
const NEERAJ: PersonaConfig = PersonaConfig {
    page: PageAccess::Neeraj,
    display_name: "Neeraj",
    agent_id: Some("agent_0501k30qjpw9fbharan0mmt0sj03"),
};
const SASHA: PersonaConfig = PersonaConfig {
    page: PageAccess::Sasha,
    display_name: "Sasha",
    agent_id: Some("agent_2901k2tzm9x2b7r9c4h5a0xcv21x"),
};
const AAMAN: PersonaConfig = PersonaConfig {
    page: PageAccess::Aaman,
    display_name: "Aaman",
    agent_id: Some("agent_6301k2rzxtr7f04ba7z12786rrwr"),
};
const GUY: PersonaConfig = PersonaConfig {
    page: PageAccess::Guy,
    display_name: "Guy Ruttenberg",
    agent_id: Some("agent_7201k2rzy9tscqxayvrvs0x6bqk0"),
};
const PARTH: PersonaConfig = PersonaConfig {
    page: PageAccess::Parth,
    display_name: "Parth",
    agent_id: Some("agent_3401k3b7nxj34xw8hs2j8zy5rrwn"),
};
const SRIVARDHAN: PersonaConfig = PersonaConfig {
    page: PageAccess::Srivardhan,
    display_name: "Srivardhan",
    agent_id: Some("agent_2301k3b7ps5p74n9xbfyk3y6xqkh"),
};
const TRANSCRIPT_ANALYZER: PersonaConfig = PersonaConfig {
    page: PageAccess::TranscriptAnalyzer,
    display_name: "Transcript Analyzer",
    agent_id: None,
};
const LEGAL_ASSISTANT: PersonaConfig = PersonaConfig {
    page: PageAccess::LegalAssistant,
    display_name: "Legal Assistant",
    agent_id: None,
};
const DASHBOARD: PersonaConfig = PersonaConfig {
    page: PageAccess::Dashboard,
    display_name: "Dashboard",
    agent_id: None,
};

const PERSONAS: [PersonaConfig; 12] = [
    SAVAR,
    ARIHANT,
    SAJJAD,
    NEERAJ,
    SASHA,
    AAMAN,
    GUY,
    PARTH,
    SRIVARDHAN,
    TRANSCRIPT_ANALYZER,
    LEGAL_ASSISTANT,
    DASHBOARD,
];

/// All personas, in catalog order.
pub fn personas() -> &'static [PersonaConfig] {
    &PERSONAS
}

/// The persona for a page. The match is exhaustive over the closed tag set,
/// so every page has exactly one entry.
pub const fn persona(page: PageAccess) -> &'static PersonaConfig {
    match page {
        PageAccess::Savar => &SAVAR,
        PageAccess::Arihant => &ARIHANT,
        PageAccess::Sajjad => &SAJJAD,
        PageAccess::Neeraj => &NEERAJ,
        PageAccess::Sasha => &SASHA,
        PageAccess::Aaman => &AAMAN,
        PageAccess::Guy => &GUY,
        PageAccess::Parth => &PARTH,
        PageAccess::Srivardhan => &SRIVARDHAN,
        PageAccess::TranscriptAnalyzer => &TRANSCRIPT_ANALYZER,
        PageAccess::LegalAssistant => &LEGAL_ASSISTANT,
        PageAccess::Dashboard => &DASHBOARD,
    }
}
