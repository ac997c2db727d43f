//! Shared types for the Parley platform.
//!
//! This crate provides the foundational types used across all Parley crates:
//! the closed set of page tags, the validated user-metadata record read from
//! the identity provider, and the analysis and conversation data shapes.
//!
//! No crate in the workspace depends on anything *except* `parley-types` for
//! cross-cutting type definitions. This keeps the dependency graph clean and
//! prevents circular dependencies.

mod analysis;
mod conversation;
mod metadata;
mod page;

pub use analysis::{AnalysisBlock, BlockRequest, ProcessedResult};
pub use conversation::{ConversationPage, ConversationRecord};
pub use metadata::{MetadataPatch, UserMetadata};
pub use page::PageAccess;
