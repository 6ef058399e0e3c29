use std::env;
use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod middleware;
mod routes;
mod seed;
mod state;

use config::ServiceConfig;
use mindcheck_storage::store::S3Store;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServiceConfig::from_env();
    let s3 = mindcheck_storage::client::build_client(config.s3_endpoint.as_deref()).await;
    let store = S3Store::new(s3, config.bucket.clone());

    if env::args().nth(1).as_deref() == Some("seed") {
        return seed::run(&store).await;
    }

    let reference = config::load_reference_data(config.reference_data_path.as_deref())?;

    let state = AppState {
        store,
        reference: Arc::new(reference),
    };

    let app = router(state);

    match config.listen_addr {
        Some(addr) => {
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(addr = %addr, bucket = %config.bucket, "listening");
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => lambda_http::run(app).await.map_err(|e| eyre::eyre!(e)),
    }
}

fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/questionnaires",
            get(routes::questionnaires::list_questionnaires),
        )
        .route(
            "/questionnaires/{id}",
            get(routes::questionnaires::get_questionnaire),
        )
        .route(
            "/questionnaires/{id}/submit",
            post(routes::questionnaires::submit_questionnaire),
        )
        .route(
            "/quick",
            get(routes::quick::list_quick_questions).post(routes::quick::submit_quick),
        )
        .route("/results/{id}", get(routes::results::get_result))
        .route("/history/{owner}", get(routes::history::list_history))
        .route(
            "/history/{owner}/summary",
            get(routes::history::get_history_summary),
        )
        .route("/risk-bands", get(routes::reference::list_risk_bands))
        .route("/resources", get(routes::resources::list_resources))
        .route("/resources/{id}", get(routes::resources::get_resource))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
