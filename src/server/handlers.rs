use super::{
    responses::{error_response, success_response},
    types::ChatRequest,
};
use crate::{
    chat::ChatResponder,
    config::AuthConfig,
    logs::{LogQueryParams, LogQueryService},
    proxy::{DashboardProxy, TrainingProxy},
};
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Json, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

pub const CHATBOT_SERVICE: &str = "NLP Chatbot students";
pub const SUPER_USER_HEADER: &str = "x-api-key";

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatResponder>,
    pub logs: Arc<LogQueryService>,
    pub dashboard: Arc<DashboardProxy>,
    pub training: Arc<TrainingProxy>,
    pub auth: Arc<AuthConfig>,
}

impl AppState {
    fn is_super_user(&self, headers: &HeaderMap) -> bool {
        headers
            .get(SUPER_USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|key| self.auth.is_super_user_key(key))
    }
}

pub async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Response {
    let span = info_span!("request", service = CHATBOT_SERVICE, request_id = %Uuid::new_v4());

    async move {
        info!("Received chat question ({} chars)", request.question.len());
        match state
            .chat
            .answer(&request.question, request.max_tokens)
            .await
        {
            Ok(answer) => success_response(answer),
            Err(e) => error_response(e),
        }
    }
    .instrument(span)
    .await
}

pub async fn ask_ai(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<LogQueryParams>,
) -> Response {
    let span = info_span!(
        "request",
        service = crate::logs::SERVICE_NAME,
        request_id = %Uuid::new_v4()
    );

    async move {
        let is_super_user = state.is_super_user(&headers);
        info!(
            "Received log query (super user: {}, monitor: {})",
            is_super_user,
            params.is_monitor()
        );
        match state.logs.process_get_request(&params, is_super_user).await {
            Ok(envelope) => success_response(envelope),
            Err(e) => error_response(e),
        }
    }
    .instrument(span)
    .await
}

pub async fn dashboard_student(
    State(state): State<AppState>,
    Json(profile): Json<Value>,
) -> Response {
    let span = info_span!(
        "request",
        function = state.dashboard.function_name(),
        request_id = %Uuid::new_v4()
    );

    async move {
        match state.dashboard.dashboard_student(&profile).await {
            Ok(envelope) => success_response(envelope),
            Err(e) => error_response(e),
        }
    }
    .instrument(span)
    .await
}

pub async fn launch_train(State(state): State<AppState>, Json(request): Json<Value>) -> Response {
    let span = info_span!(
        "request",
        function = state.training.function_name(),
        request_id = %Uuid::new_v4()
    );

    async move {
        match state.training.launch_train(&request).await {
            Ok(envelope) => success_response(envelope),
            Err(e) => error_response(e),
        }
    }
    .instrument(span)
    .await
}
