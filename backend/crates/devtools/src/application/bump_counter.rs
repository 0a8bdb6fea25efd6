//! Bump Counter Use Case

use crate::application::config::DevToolsConfig;
use crate::domain::repository::CounterRepository;
use crate::error::DevToolsResult;
use std::sync::Arc;

/// Bump Counter Use Case
///
/// Increments the shared test counter and returns the new value. Handy for
/// checking that the service and its storage are wired together.
pub struct BumpCounterUseCase<C>
where
    C: CounterRepository,
{
    counter_repo: Arc<C>,
    config: Arc<DevToolsConfig>,
}

impl<C> BumpCounterUseCase<C>
where
    C: CounterRepository,
{
    pub fn new(counter_repo: Arc<C>, config: Arc<DevToolsConfig>) -> Self {
        Self {
            counter_repo,
            config,
        }
    }

    pub async fn execute(&self) -> DevToolsResult<i64> {
        let value = self.counter_repo.increment(&self.config.counter_key).await?;

        tracing::info!(
            key = %self.config.counter_key,
            value = value,
            "Test counter incremented"
        );

        Ok(value)
    }
}
