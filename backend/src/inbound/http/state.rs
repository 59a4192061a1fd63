//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the query port and remain testable without real wiring.

use std::sync::Arc;

use crate::domain::{Roster, RosterUsersQuery, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Collection and single-item user queries.
    pub users: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Construct state over an explicit query implementation.
    #[must_use]
    pub fn new(users: Arc<dyn UsersQuery>) -> Self {
        Self { users }
    }

    /// Construct state backed by the fixed seed roster.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(Arc::new(RosterUsersQuery::new(Arc::new(Roster::seed()))))
    }
}
