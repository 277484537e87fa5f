use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, fmt};

use onboarding::modules::auth::adapters::outbound::users_sqlx::SqlxUserRepository;
use onboarding::modules::auth::use_cases::sign_up::handler::RegisterUserHandler;
use onboarding::shared::infrastructure::config::Settings;
use onboarding::shared::infrastructure::database::Database;
use onboarding::shell::graphql::build_schema;
use onboarding::shell::http::router;
use onboarding::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let settings = Settings::from_env();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.app.log_level)),
        )
        .init();

    tracing::info!(environment = %settings.app.environment, "starting onboarding API");

    let database = Arc::new(Database::connect(&settings.database).await?);
    database.migrate().await?;

    let repository = Arc::new(SqlxUserRepository::new(database.pool().clone()));
    let sign_up_handler = Arc::new(RegisterUserHandler::new(repository));

    let state = AppState {
        config: settings.app.clone(),
        database,
        sign_up_handler,
    };

    let schema = build_schema(state.clone());
    let app = router(state, schema)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", settings.app.port).parse()?;
    tracing::info!("REST endpoints: http://{addr}/{}", settings.app.api_prefix);
    tracing::info!("GraphQL endpoint: http://{addr}/gql");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut terminate =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {err}");
    }

    tracing::info!("shutdown signal received, commencing graceful shutdown");
}
