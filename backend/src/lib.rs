//! Roster backend library modules.
//!
//! The crate is split into a transport-agnostic `domain` layer, an
//! `inbound` HTTP adapter, request middleware, and the OpenAPI document.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request-scoped trace identifier primitive.
pub use domain::TraceId;
/// Tracing middleware attaching a per-request trace identifier.
pub use middleware::trace::Trace;
