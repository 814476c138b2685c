//! Service line access gating.

use serde::{Deserialize, Serialize};

/// What a gate asks the resolver about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    /// Service line code, e.g. "TAX".
    pub service_line: String,
    /// Minimum role within the service line, if any.
    pub minimum_role: Option<String>,
}

/// Resolver answer for one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessState {
    /// Whether the user has the requested access.
    pub has_access: bool,
    /// Whether the answer is still being fetched.
    pub is_loading: bool,
}

/// Looks up a user's access to a service line.
#[cfg_attr(test, mockall::automock)]
pub trait AccessResolver {
    /// Resolves `request` for the current user.
    fn resolve(&self, request: &AccessRequest) -> AccessState;
}

/// What a gated region should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateOutcome {
    /// Access is still resolving and a loading view was requested.
    Loading,
    /// Show the gated content.
    Granted,
    /// Show the fallback.
    Denied,
}

impl GateOutcome {
    /// Picks the value matching this outcome.
    pub fn select<T>(self, granted: T, denied: T, loading: T) -> T {
        match self {
            Self::Granted => granted,
            Self::Denied => denied,
            Self::Loading => loading,
        }
    }
}

/// Gate on a service line and optional minimum role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLineGate {
    request: AccessRequest,
    show_loading: bool,
}

impl ServiceLineGate {
    /// Creates a gate for `service_line` with no role requirement.
    #[must_use]
    pub fn new(service_line: impl Into<String>) -> Self {
        Self {
            request: AccessRequest {
                service_line: service_line.into(),
                minimum_role: None,
            },
            show_loading: false,
        }
    }

    /// Requires at least `role` within the service line.
    #[must_use]
    pub fn with_minimum_role(mut self, role: impl Into<String>) -> Self {
        self.request.minimum_role = Some(role.into());
        self
    }

    /// Reports [`GateOutcome::Loading`] while access is resolving.
    #[must_use]
    pub fn show_loading(mut self, show: bool) -> Self {
        self.show_loading = show;
        self
    }

    /// Decides what to show.
    ///
    /// Without `show_loading`, a pending answer is judged on `has_access`
    /// as it currently stands.
    pub fn evaluate(&self, resolver: &impl AccessResolver) -> GateOutcome {
        let state = resolver.resolve(&self.request);

        let outcome = if state.is_loading && self.show_loading {
            GateOutcome::Loading
        } else if state.has_access {
            GateOutcome::Granted
        } else {
            GateOutcome::Denied
        };

        tracing::debug!(
            service_line = %self.request.service_line,
            minimum_role = ?self.request.minimum_role,
            ?outcome,
            "service line gate evaluated"
        );
        outcome
    }
}
