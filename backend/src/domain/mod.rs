//! Domain primitives and aggregates.
//!
//! Purpose: define the strongly typed roster entities used by the HTTP
//! adapter. Keep types immutable and document invariants and serialisation
//! contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - `User` / `Group` / `UserName` — roster user identity and grouping.
//! - `Roster` — the immutable seeded user store.
//! - `UsersQuery` / `RosterUsersQuery` — collection and single-item queries.
//! - `Error` / `ErrorCode` — API error response payload.
//! - `TraceId` — request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod roster;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::ports::{RosterUsersQuery, UsersQuery};
pub use self::roster::Roster;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Group, User, UserName, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use roster::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_implemented("not yet"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
