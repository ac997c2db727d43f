//! Identity-provider boundary for the Parley platform.
//!
//! Authentication itself is delegated to an external identity provider; this
//! crate owns the seam. It defines the resolved [`Identity`], the
//! three-valued [`IdentityState`] consumed by the access guard, the
//! [`IdentityProvider`] trait behind which the provider sits, and an HTTP
//! implementation of that trait including the read-merge-write metadata
//! update.

mod error;
mod http;
mod provider;

pub use error::IdentityError;
pub use http::{HttpIdentityProvider, ProviderConfig};
pub use provider::{Identity, IdentityProvider, IdentityState};
