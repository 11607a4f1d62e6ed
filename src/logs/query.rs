use serde::Deserialize;

pub const MISSING_IDENTITY: &str = "please provide serviceId or predictionId";
pub const MONITOR_MODE: &str = "monitor";
const DEFAULT_ORDER: &str = " order by timestamp desc limit 100";

/// Query-string parameters accepted by the prediction-log endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogQueryParams {
    pub service_id: Option<String>,
    pub prediction_id: Option<String>,
    pub mode: Option<String>,
    pub start_timestamp: Option<String>,
    pub end_timestamp: Option<String>,
}

impl LogQueryParams {
    fn field(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }

    pub fn service_id(&self) -> Option<&str> {
        Self::field(&self.service_id)
    }

    pub fn prediction_id(&self) -> Option<&str> {
        Self::field(&self.prediction_id)
    }

    pub fn is_monitor(&self) -> bool {
        Self::field(&self.mode) == Some(MONITOR_MODE)
    }

    /// Identity is required unless a super user asks for monitor mode.
    pub fn validate(&self, is_super_user: bool) -> Result<(), &'static str> {
        if self.service_id().is_none()
            && self.prediction_id().is_none()
            && !(self.is_monitor() && is_super_user)
        {
            return Err(MISSING_IDENTITY);
        }
        Ok(())
    }

    pub fn build_statement(&self, table_name: &str) -> String {
        let mut statement = format!("select * from {table_name}");
        let mut filters = Vec::new();

        if let Some(ser_id) = self.service_id() {
            filters.push(format!("ser_id={}", quote_literal(ser_id)));
        } else if let Some(prediction_id) = self.prediction_id() {
            filters.push(format!("prediction_id={}", quote_literal(prediction_id)));
        }
        if let Some(start) = Self::field(&self.start_timestamp) {
            filters.push(format!("timestamp > {}", quote_literal(start)));
        }
        if let Some(end) = Self::field(&self.end_timestamp) {
            filters.push(format!("timestamp <= {}", quote_literal(end)));
        }

        for (index, filter) in filters.iter().enumerate() {
            statement.push_str(if index == 0 { " where " } else { " and " });
            statement.push_str(filter);
        }

        if filters.is_empty() {
            statement.push_str(DEFAULT_ORDER);
        }

        statement
    }
}

fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
