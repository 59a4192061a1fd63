//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod state;
pub mod uploads;
pub mod users;

pub use error::ApiResult;

use actix_web::web;

/// Register the versioned API route trees.
///
/// The v1 and v2 trees expose the same handlers; v1 pins the group filter
/// to Gemini while v2 serves the unfiltered roster. Shared between the
/// server factory and integration tests so both exercise identical routing.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(users::list_users_v1)
            .service(users::get_user_v1)
            .service(uploads::store_file),
    )
    .service(
        web::scope("/api/v2")
            .service(users::list_users_v2)
            .service(users::get_user_v2)
            .service(uploads::upload),
    );
}
