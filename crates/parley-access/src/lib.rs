//! Access control for the Parley platform.
//!
//! Permissions are derived, never stored: on every read the user's metadata
//! blob is parsed and checked against [`AccessPolicy`], which consolidates
//! the page tables (previously duplicated across call sites) into one
//! configurable source. The [`guard`] module holds the pure state machine
//! that gates page rendering on the identity context.

mod guard;
mod policy;

pub use guard::{AccessGuard, GuardDecision};
pub use policy::{AccessPolicy, OwnershipTables, PageCategories};
