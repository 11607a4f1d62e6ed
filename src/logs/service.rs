use super::LogQueryParams;
use crate::{
    Error, Result,
    envelope::Envelope,
    store::{Row, StatementExecutor, validate_table_name},
};
use std::sync::Arc;
use tracing::{debug, info};

pub const SERVICE_NAME: &str = "askAI";

pub struct LogQueryService {
    executor: Arc<dyn StatementExecutor>,
    table_name: String,
}

impl LogQueryService {
    pub fn new(
        executor: Arc<dyn StatementExecutor>,
        table_name: impl Into<String>,
    ) -> Result<Self> {
        let table_name = table_name.into();
        validate_table_name(&table_name)?;
        Ok(Self {
            executor,
            table_name,
        })
    }

    /// Validates, builds the statement and wraps the rows in a success envelope.
    ///
    /// Missing identity yields `Error::Validation` carrying the plain message.
    pub async fn process_get_request(
        &self,
        params: &LogQueryParams,
        is_super_user: bool,
    ) -> Result<Envelope<Vec<Row>>> {
        params.validate(is_super_user).map_err(Error::validation)?;

        let statement = params.build_statement(&self.table_name);
        debug!("{} statement: {}", SERVICE_NAME, statement);

        let rows = self.executor.execute_statement(&statement).await?;
        info!("{} returned {} rows", SERVICE_NAME, rows.len());

        Ok(Envelope::success(rows))
    }
}
