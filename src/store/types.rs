use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row as returned by the store, keyed by column name.
pub type Row = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub prediction_id: String,
    pub ser_id: String,
    pub timestamp: String,
    pub question: String,
    pub answer: String,
}

impl PredictionRecord {
    pub fn new(
        prediction_id: impl Into<String>,
        ser_id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self::at(prediction_id, ser_id, Utc::now(), question, answer)
    }

    pub fn at(
        prediction_id: impl Into<String>,
        ser_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            prediction_id: prediction_id.into(),
            ser_id: ser_id.into(),
            timestamp: format_timestamp(timestamp),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Timestamps are stored as `YYYY-MM-DDTHH:MM:SS` so they compare lexically.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
}
