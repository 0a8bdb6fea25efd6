//! Send Test Email Use Case

use crate::application::config::DevToolsConfig;
use crate::domain::entities::EmailJob;
use crate::domain::repository::EmailSpool;
use crate::error::DevToolsResult;
use std::sync::Arc;

/// Send Test Email Use Case
///
/// Spools an example background task. The response returns before the
/// worker touches the job.
pub struct SendTestEmailUseCase<M>
where
    M: EmailSpool,
{
    spool: Arc<M>,
    config: Arc<DevToolsConfig>,
}

impl<M> SendTestEmailUseCase<M>
where
    M: EmailSpool,
{
    pub fn new(spool: Arc<M>, config: Arc<DevToolsConfig>) -> Self {
        Self { spool, config }
    }

    pub async fn execute(&self) -> DevToolsResult<EmailJob> {
        let job = EmailJob::new(
            &self.config.test_email_to,
            &self.config.test_email_subject,
            &self.config.test_email_template,
        );

        tracing::info!(
            job_id = %job.id,
            to = %job.to,
            "Spooling background email task"
        );

        self.spool.spool(job.clone()).await?;

        Ok(job)
    }
}
