use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::modules::auth::use_cases::sign_up::dto::SignUpArgs;
use crate::modules::auth::use_cases::sign_up::handler::ApplicationError;
use crate::shell::state::AppState;

#[utoipa::path(
    post,
    path = "/v1/sign-up",
    tag = "Auth",
    operation_id = "sign_up",
    request_body = SignUpArgs,
    responses(
        (status = 201, body = crate::modules::auth::use_cases::sign_up::dto::User),
        (status = 400, description = "A request field failed validation"),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Body is not valid JSON"),
    )
)]
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SignUpArgs>, JsonRejection>,
) -> impl IntoResponse {
    let Json(args) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = match args.validate() {
        Ok(command) => command,
        Err(errors) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation failed",
                    "violations": errors.violations,
                })),
            )
                .into_response();
        }
    };

    match state.sign_up_handler.handle(command).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
