use super::mocks::{MockInvoker, MockLlmClient, MockStatementExecutor};
use aiclub_functions::{
    chat::ChatResponder,
    config::{AuthConfig, Config, FunctionsConfig, LlmConfig, LogsConfig, ServerConfig, StoreConfig},
    logs::LogQueryService,
    proxy::{DASHBOARD_STUDENT, DashboardProxy, LAUNCH_TRAIN, TrainingProxy},
    server::handlers::AppState,
};
use std::sync::Arc;

pub const FUNCTION_NAME_PREFIX: &str = "yasanthi_";
pub const SUPER_USER_KEY: &str = "super-user-key";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: "test-api-key".to_string(),
            model: "gpt-3.5-turbo".to_string(),
        },
        store: StoreConfig {
            database_path: ":memory:".to_string(),
            table_name: "ask_ai_table".to_string(),
        },
        functions: FunctionsConfig {
            base_url: "http://localhost:9001".to_string(),
            prefix: FUNCTION_NAME_PREFIX.to_string(),
        },
        auth: AuthConfig {
            super_user_keys: vec![SUPER_USER_KEY.to_string()],
        },
    }
}

/// Application state wired to the given mocks.
pub fn create_test_state(
    llm: Arc<MockLlmClient>,
    store: Arc<MockStatementExecutor>,
    invoker: Arc<MockInvoker>,
) -> AppState {
    let config = create_test_config();

    AppState {
        chat: Arc::new(ChatResponder::new(llm, &config.llm.model)),
        logs: Arc::new(LogQueryService::new(store, &config.store.table_name).unwrap()),
        dashboard: Arc::new(DashboardProxy::new(
            invoker.clone(),
            config.functions.function_name(DASHBOARD_STUDENT),
        )),
        training: Arc::new(TrainingProxy::new(
            invoker,
            config.functions.function_name(LAUNCH_TRAIN),
        )),
        auth: Arc::new(config.auth),
    }
}
