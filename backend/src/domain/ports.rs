//! Query ports consumed by inbound adapters.
//!
//! Adapters depend on the [`UsersQuery`] trait rather than the concrete
//! store so handlers stay testable with substitute implementations. The
//! operations are pure reads over immutable data and therefore infallible;
//! absence is modelled as `None`, not as an error.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::roster::Roster;
use crate::domain::user::{Group, User};

/// Collection and single-item queries over the user roster.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Ordered users matching the optional group filter.
    ///
    /// With no filter, the full seeded sequence is returned. An empty
    /// result is a valid empty sequence, never an error.
    async fn list_users(&self, filter: Option<Group>) -> Vec<User>;

    /// First user whose name matches case-insensitively, or `None`.
    ///
    /// The name match is located first in store order; the group filter is
    /// then applied to that match. A name hit in the wrong group is
    /// therefore absence, not a fall-through to a later duplicate.
    async fn find_user(&self, name: &str, filter: Option<Group>) -> Option<User>;
}

/// [`UsersQuery`] implementation backed by the seeded in-memory roster.
#[derive(Debug, Clone)]
pub struct RosterUsersQuery {
    roster: Arc<Roster>,
}

impl RosterUsersQuery {
    /// Wrap a shared roster.
    #[must_use]
    pub fn new(roster: Arc<Roster>) -> Self {
        Self { roster }
    }
}

impl Default for RosterUsersQuery {
    fn default() -> Self {
        Self::new(Arc::new(Roster::seed()))
    }
}

#[async_trait]
impl UsersQuery for RosterUsersQuery {
    async fn list_users(&self, filter: Option<Group>) -> Vec<User> {
        self.roster
            .all()
            .iter()
            .filter(|user| filter.is_none_or(|group| user.group() == group))
            .cloned()
            .collect()
    }

    async fn find_user(&self, name: &str, filter: Option<Group>) -> Option<User> {
        self.roster
            .all()
            .iter()
            .find(|user| user.name().matches(name))
            .filter(|user| filter.is_none_or(|group| user.group() == group))
            .cloned()
    }
}
