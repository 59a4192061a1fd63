//! Users API handlers.
//!
//! ```text
//! GET /api/v1/user/        # Gemini users only
//! GET /api/v1/user/{name}  # Gemini users only, 404 otherwise
//! GET /api/v2/user/        # full roster
//! GET /api/v2/user/{name}  # any group, 404 when absent
//! ```
//!
//! The two versions share one lookup path; v1 pins the filter to
//! [`Group::Gemini`] rather than duplicating the query logic.

use actix_web::{HttpResponse, get, web};
use tracing::debug;

use crate::domain::{Group, User};
use crate::inbound::http::state::HttpState;

async fn list(state: &HttpState, filter: Option<Group>) -> web::Json<Vec<User>> {
    web::Json(state.users.list_users(filter).await)
}

/// Single-item lookup shared by both route trees.
///
/// Absence is not an error condition: a miss renders as 404 with an empty
/// body rather than the structured error schema.
async fn lookup(state: &HttpState, name: &str, filter: Option<Group>) -> HttpResponse {
    match state.users.find_user(name, filter).await {
        Some(user) => HttpResponse::Ok().json(user),
        None => {
            debug!(name, ?filter, "user lookup missed");
            HttpResponse::NotFound().finish()
        }
    }
}

/// List Gemini users.
#[utoipa::path(
    get,
    path = "/api/v1/user/",
    responses(
        (status = 200, description = "Gemini users in roster order", body = [User]),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "listUsersV1"
)]
#[get("/user/")]
pub async fn list_users_v1(state: web::Data<HttpState>) -> web::Json<Vec<User>> {
    list(&state, Some(Group::Gemini)).await
}

/// Fetch a Gemini user by name, matched case-insensitively.
#[utoipa::path(
    get,
    path = "/api/v1/user/{name}",
    params(
        ("name" = String, Path, description = "User name, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Matching Gemini user", body = User),
        (status = 404, description = "No Gemini user with that name; empty body"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "getUserV1"
)]
#[get("/user/{name}")]
pub async fn get_user_v1(state: web::Data<HttpState>, name: web::Path<String>) -> HttpResponse {
    lookup(&state, &name.into_inner(), Some(Group::Gemini)).await
}

/// List the full roster.
#[utoipa::path(
    get,
    path = "/api/v2/user/",
    responses(
        (status = 200, description = "All users in roster order", body = [User]),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "listUsersV2"
)]
#[get("/user/")]
pub async fn list_users_v2(state: web::Data<HttpState>) -> web::Json<Vec<User>> {
    list(&state, None).await
}

/// Fetch any user by name, matched case-insensitively.
#[utoipa::path(
    get,
    path = "/api/v2/user/{name}",
    params(
        ("name" = String, Path, description = "User name, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Matching user", body = User),
        (status = 404, description = "No user with that name; empty body"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "getUserV2"
)]
#[get("/user/{name}")]
pub async fn get_user_v2(state: web::Data<HttpState>, name: web::Path<String>) -> HttpResponse {
    lookup(&state, &name.into_inner(), None).await
}
