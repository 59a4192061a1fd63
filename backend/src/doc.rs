//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: the versioned user routes, the declared upload
//! endpoints, and the health probes. The generated specification backs
//! Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Group, User};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster backend API",
        description = "HTTP interface for the versioned user roster and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users_v1,
        crate::inbound::http::users::get_user_v1,
        crate::inbound::http::users::list_users_v2,
        crate::inbound::http::users::get_user_v2,
        crate::inbound::http::uploads::store_file,
        crate::inbound::http::uploads::upload,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, Group, Error, ErrorCode)),
    tags(
        (name = "users", description = "Roster collection and single-item queries"),
        (name = "uploads", description = "Declared endpoints without behaviour"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
