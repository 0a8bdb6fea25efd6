//! Spooled Mailer
//!
//! Email delivery runs on a background worker task fed through an unbounded
//! channel, so spooling from a request handler never blocks. Delivery
//! itself is a tracing event here; a real relay hangs off `deliver`.

use crate::domain::entities::EmailJob;
use crate::domain::repository::EmailSpool;
use crate::error::{DevToolsError, DevToolsResult};
use tokio::sync::mpsc;

/// Handle for spooling email jobs to the background worker
#[derive(Clone)]
pub struct SpooledMailer {
    tx: mpsc::UnboundedSender<EmailJob>,
}

impl SpooledMailer {
    /// Spawn the delivery worker and return the spool handle
    pub fn spawn() -> Self {
        let (mailer, rx) = Self::channel();
        tokio::spawn(deliver_jobs(rx));
        mailer
    }

    /// Create a spool without spawning the worker. The caller owns the
    /// receiver and drains it however it likes (used in tests and by hosts
    /// that run their own worker).
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<EmailJob>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EmailSpool for SpooledMailer {
    async fn spool(&self, job: EmailJob) -> DevToolsResult<()> {
        self.tx
            .send(job)
            .map_err(|_| DevToolsError::SpoolUnavailable)?;
        Ok(())
    }
}

/// Worker loop: drains the spool until every sender is dropped
pub async fn deliver_jobs(mut rx: mpsc::UnboundedReceiver<EmailJob>) {
    while let Some(job) = rx.recv().await {
        deliver(&job).await;
    }
    tracing::debug!("Email spool closed, worker exiting");
}

async fn deliver(job: &EmailJob) {
    tracing::info!(
        job_id = %job.id,
        to = %job.to,
        subject = %job.subject,
        template = %job.template,
        "Delivering spooled email"
    );
}
