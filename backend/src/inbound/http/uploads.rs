//! Declared-but-unimplemented upload endpoints.
//!
//! Both `POST` routes exist in the public surface with no defined
//! behaviour. They answer 501 with the standard error schema instead of
//! silently accepting payloads, so clients cannot mistake them for working
//! endpoints.

use actix_web::{HttpResponse, post};

use crate::domain::Error;
use crate::inbound::http::ApiResult;

/// Declared file-storage endpoint on the v1 tree.
#[utoipa::path(
    post,
    path = "/api/v1/file",
    responses(
        (status = 501, description = "Endpoint declared without behaviour", body = Error)
    ),
    tags = ["uploads"],
    operation_id = "storeFile"
)]
#[post("/file")]
pub async fn store_file() -> ApiResult<HttpResponse> {
    Err(Error::not_implemented("file storage is not implemented"))
}

/// Declared upload endpoint on the v2 tree.
#[utoipa::path(
    post,
    path = "/api/v2/upload",
    responses(
        (status = 501, description = "Endpoint declared without behaviour", body = Error)
    ),
    tags = ["uploads"],
    operation_id = "upload"
)]
#[post("/upload")]
pub async fn upload() -> ApiResult<HttpResponse> {
    Err(Error::not_implemented("upload is not implemented"))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test as actix_test, web};
    use rstest::rstest;
    use serde_json::Value;

    use super::super::{configure, state::HttpState};

    #[rstest]
    #[case("/api/v1/file")]
    #[case("/api/v2/upload")]
    #[actix_web::test]
    async fn declared_endpoints_answer_not_implemented(#[case] uri: &str) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::seeded()))
                .configure(configure),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post().uri(uri).to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("not_implemented")
        );
    }
}
