use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    pub functions: FunctionsConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub base_url: String,
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Prediction-log store queried by the askAI endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default = "default_table_name")]
    pub table_name: String,
}

/// Where proxied functions live and how their names are formed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionsConfig {
    pub base_url: String,
    #[serde(default = "default_function_prefix")]
    pub prefix: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub super_user_keys: Vec<String>,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            table_name: default_table_name(),
        }
    }
}

impl FunctionsConfig {
    pub fn function_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

impl AuthConfig {
    pub fn is_super_user_key(&self, key: &str) -> bool {
        self.super_user_keys.iter().any(|k| k == key)
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_database_path() -> String {
    "predictions.db".to_string()
}

fn default_table_name() -> String {
    "ask_ai_table".to_string()
}

fn default_function_prefix() -> String {
    "yasanthi_".to_string()
}
