//! The agent catalog: persona configuration, the external voice-platform
//! boundary, and the in-memory store of user-created agents.
//!
//! The real-time voice conversation itself happens between the client and
//! the platform; this crate only manages agents and lists past
//! conversations over the platform's REST API.

mod error;
mod personas;
mod platform;
mod store;

pub use error::CatalogError;
pub use personas::{persona, personas, PersonaConfig};
pub use platform::{AgentCreateConfig, PlatformConfig, VoicePlatform, VoicePlatformClient};
pub use store::{AgentRecord, AgentStore};
