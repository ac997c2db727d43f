//! The access-guard state machine.
//!
//! Gates rendering of a protected page on the identity context:
//! `Loading` shows nothing but a wait state, `Unauthenticated` issues a
//! single redirect to sign-in (terminal for the render cycle), and an
//! authenticated identity without the required page gets a terminal denial.
//! Protected content is produced only on [`GuardDecision::Allow`].

use crate::AccessPolicy;
use parley_identity::IdentityState;
use parley_types::PageAccess;

/// The outcome of observing an identity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Identity not resolved yet; render nothing.
    Wait,
    /// No account; redirect to sign-in. Issued at most once per guard.
    RedirectToSignIn,
    /// Authenticated but lacking the required page. Terminal.
    Deny,
    /// Authenticated with the required page; render the wrapped content.
    Allow,
}

/// A guard instance for one protected page render cycle.
#[derive(Debug)]
pub struct AccessGuard<'p> {
    policy: &'p AccessPolicy,
    required: PageAccess,
    redirected: bool,
}

impl<'p> AccessGuard<'p> {
    pub fn new(policy: &'p AccessPolicy, required: PageAccess) -> Self {
        Self {
            policy,
            required,
            redirected: false,
        }
    }

    /// Evaluates the current identity state.
    ///
    /// Identity resolution completes as a single one-shot notification, so
    /// an `Unauthenticated` observation drives exactly one redirect; repeat
    /// observations keep rendering the wait state.
    pub fn observe(&mut self, state: &IdentityState) -> GuardDecision {
        match state {
            IdentityState::Loading => GuardDecision::Wait,
            IdentityState::Unauthenticated => {
                if self.redirected {
                    GuardDecision::Wait
                } else {
                    self.redirected = true;
                    GuardDecision::RedirectToSignIn
                }
            }
            IdentityState::Authenticated(identity) => {
                if self.policy.has_page_access(&identity.metadata, self.required) {
                    GuardDecision::Allow
                } else {
                    GuardDecision::Deny
                }
            }
        }
    }
}
