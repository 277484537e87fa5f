use axum::{
    Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse,
};
use serde_json::json;

use crate::modules::hello::use_cases::say_hello::dto::SayHelloRequest;
use crate::modules::hello::use_cases::say_hello::handler::greet;

#[utoipa::path(
    post,
    path = "/v1/hello",
    tag = "Hello",
    operation_id = "say_hello",
    request_body = SayHelloRequest,
    responses(
        (status = 200, body = crate::modules::hello::use_cases::say_hello::dto::HelloResponse),
        (status = 400, description = "A request field failed validation"),
        (status = 422, description = "Body is not valid JSON"),
    )
)]
pub async fn handle(body: Result<Json<SayHelloRequest>, JsonRejection>) -> impl IntoResponse {
    let Json(request) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match request.validate() {
        Ok(command) => Json(greet(command)).into_response(),
        Err(errors) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "validation failed",
                "violations": errors.violations,
            })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod say_hello_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::handle;

    fn app() -> Router {
        Router::new().route("/hello", post(handle))
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_greeting_on_valid_request() {
        let response = app()
            .oneshot(
                Request::post("/hello")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"Ada"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "msg": "Hello, Ada!" }));
    }

    #[tokio::test]
    async fn it_should_return_400_listing_the_name_violation_on_empty_name() {
        let response = app()
            .oneshot(
                Request::post("/hello")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":""}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "validation failed");
        assert_eq!(json["violations"][0]["field"], "name");
        assert_eq!(json["violations"][0]["rule"], "must not be empty");
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let response = app()
            .oneshot(
                Request::post("/hello")
                    .header("content-type", "application/json")
                    .body(Body::from("not-json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
