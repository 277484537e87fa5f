use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Json, Router,
    extract::State,
    routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::modules::auth::use_cases::sign_up::inbound::http as sign_up_http;
use crate::modules::hello::use_cases::say_hello::inbound::http as hello_http;
use crate::shell::graphql::AppSchema;
use crate::shell::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::hello::use_cases::say_hello::inbound::http::handle,
        crate::modules::auth::use_cases::sign_up::inbound::http::handle,
        health,
    ),
    components(schemas(
        crate::modules::hello::use_cases::say_hello::dto::SayHelloRequest,
        crate::modules::hello::use_cases::say_hello::dto::HelloResponse,
        crate::modules::auth::use_cases::sign_up::dto::SignUpArgs,
        crate::modules::auth::use_cases::sign_up::dto::User,
    ))
)]
pub struct ApiDoc;

pub fn router(state: AppState, schema: AppSchema) -> Router {
    let api = Router::new()
        .route("/hello", post(hello_http::handle))
        .route("/sign-up", post(sign_up_http::handle));

    Router::new()
        .nest(&format!("/{}", state.config.api_prefix), api)
        .route("/health", get(health))
        .route("/gql", get(graphiql).post(graphql_handler))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(Extension(schema))
}

async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service and database status"))
)]
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let status = if state.database.ping().await {
        "ok"
    } else {
        "degraded"
    };
    Json(serde_json::json!({ "status": status }))
}
