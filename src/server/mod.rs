pub mod handlers;
pub mod responses;
mod types;

pub use types::{ChatRequest, ErrorResponse, UnsupportedMethodResponse};

use crate::{
    Result,
    chat::ChatResponder,
    config::Config,
    invoke::{FunctionInvoker, HttpInvoker},
    llm::OpenAiClient,
    logs::LogQueryService,
    proxy::{DASHBOARD_STUDENT, DashboardProxy, LAUNCH_TRAIN, TrainingProxy},
    store::LibsqlStore,
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use responses::unsupported_method;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(handlers::chat).fallback(unsupported_method))
        .route("/ask-ai", get(handlers::ask_ai).fallback(unsupported_method))
        .route(
            "/dashboard/student",
            post(handlers::dashboard_student).fallback(unsupported_method),
        )
        .route(
            "/train/launch",
            post(handlers::launch_train).fallback(unsupported_method),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn build_state(config: &Config) -> Result<AppState> {
    let db_path = std::env::var("STORE_DB_PATH")
        .unwrap_or_else(|_| config.store.database_path.clone());
    let store = LibsqlStore::new(&db_path, &config.store.table_name).await?;

    let llm = Arc::new(OpenAiClient::new(config.llm.clone()));
    let invoker: Arc<dyn FunctionInvoker> = Arc::new(HttpInvoker::new(&config.functions.base_url));

    Ok(AppState {
        chat: Arc::new(ChatResponder::new(llm, &config.llm.model)),
        logs: Arc::new(LogQueryService::new(
            Arc::new(store),
            &config.store.table_name,
        )?),
        dashboard: Arc::new(DashboardProxy::new(
            invoker.clone(),
            config.functions.function_name(DASHBOARD_STUDENT),
        )),
        training: Arc::new(TrainingProxy::new(
            invoker,
            config.functions.function_name(LAUNCH_TRAIN),
        )),
        auth: Arc::new(config.auth.clone()),
    })
}

pub async fn run(config: Config) -> Result<()> {
    let app = router(build_state(&config).await?);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
