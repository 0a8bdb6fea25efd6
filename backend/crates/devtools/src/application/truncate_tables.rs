//! Truncate Tables Use Case

use crate::application::config::DevToolsConfig;
use crate::domain::repository::FixtureRepository;
use crate::error::{DevToolsError, DevToolsResult};
use std::sync::Arc;

/// Truncate Tables Use Case
///
/// Empties the configured tables so an external test script can start from
/// a clean database. The router only registers the endpoint in local
/// deployments; the guard here rejects any other assembly.
pub struct TruncateTablesUseCase<F>
where
    F: FixtureRepository,
{
    fixture_repo: Arc<F>,
    config: Arc<DevToolsConfig>,
}

impl<F> TruncateTablesUseCase<F>
where
    F: FixtureRepository,
{
    pub fn new(fixture_repo: Arc<F>, config: Arc<DevToolsConfig>) -> Self {
        Self {
            fixture_repo,
            config,
        }
    }

    pub async fn execute(&self) -> DevToolsResult<()> {
        if !self.config.environment.is_local() {
            return Err(DevToolsError::LocalDevOnly);
        }

        self.fixture_repo
            .truncate_all(&self.config.truncate_tables)
            .await?;

        tracing::info!(
            tables = %self.config.truncate_tables.join(", "),
            "Truncated test tables"
        );

        Ok(())
    }
}
