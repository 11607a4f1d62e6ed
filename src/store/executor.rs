use super::{PredictionRecord, Row};
use crate::{Error, Result};
use async_trait::async_trait;
use libsql::{Builder, Connection, Database, Value as SqlValue};
use serde_json::Value;
use tracing::{debug, info};

/// Runs ad-hoc statements against the prediction-log store.
#[async_trait]
pub trait StatementExecutor: Send + Sync {
    async fn execute_statement(&self, statement: &str) -> Result<Vec<Row>>;
}

pub struct LibsqlStore {
    _db: Database,
    conn: Connection,
    table_name: String,
}

impl LibsqlStore {
    pub async fn new(db_path: &str, table_name: &str) -> Result<Self> {
        validate_table_name(table_name)?;

        let db = Builder::new_local(db_path).build().await?;
        let conn = db.connect()?;

        conn.execute(
            &format!(
                r#"
                CREATE TABLE IF NOT EXISTS {table_name} (
                    prediction_id TEXT PRIMARY KEY,
                    ser_id TEXT NOT NULL,
                    timestamp TEXT NOT NULL,
                    question TEXT NOT NULL DEFAULT '',
                    answer TEXT NOT NULL DEFAULT ''
                )
                "#
            ),
            (),
        )
        .await?;

        info!("Prediction store initialized: {} ({})", db_path, table_name);

        Ok(Self {
            _db: db,
            conn,
            table_name: table_name.to_string(),
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Appends a prediction row. The query endpoint only reads the table; this
    /// is how local databases and tests are seeded.
    pub async fn record(&self, record: &PredictionRecord) -> Result<()> {
        self.conn
            .execute(
                &format!(
                    "INSERT INTO {} (prediction_id, ser_id, timestamp, question, answer) \
                     VALUES (?, ?, ?, ?, ?)",
                    self.table_name
                ),
                (
                    record.prediction_id.as_str(),
                    record.ser_id.as_str(),
                    record.timestamp.as_str(),
                    record.question.as_str(),
                    record.answer.as_str(),
                ),
            )
            .await?;
        debug!("Prediction recorded: {}", record.prediction_id);
        Ok(())
    }
}

#[async_trait]
impl StatementExecutor for LibsqlStore {
    async fn execute_statement(&self, statement: &str) -> Result<Vec<Row>> {
        debug!("Executing statement: {}", statement);

        let mut rows = self.conn.query(statement, ()).await?;

        let columns: Vec<String> = (0..rows.column_count())
            .map(|idx| {
                rows.column_name(idx)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("column_{idx}"))
            })
            .collect();

        let mut result = Vec::new();
        while let Some(row) = rows.next().await? {
            let mut record = Row::new();
            for (idx, column) in columns.iter().enumerate() {
                let value = row.get_value(idx as i32)?;
                record.insert(column.clone(), to_json(value));
            }
            result.push(record);
        }

        debug!("Statement returned {} rows", result.len());
        Ok(result)
    }
}

/// Table names end up inside statements verbatim.
pub fn validate_table_name(table_name: &str) -> Result<()> {
    let valid = !table_name.is_empty()
        && table_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !table_name.starts_with(|c: char| c.is_ascii_digit());

    if valid {
        Ok(())
    } else {
        Err(Error::config(format!("Invalid table name: '{table_name}'")))
    }
}

fn to_json(value: SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(i) => Value::from(i),
        SqlValue::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        SqlValue::Text(s) => Value::String(s),
        SqlValue::Blob(bytes) => Value::from(bytes),
    }
}
