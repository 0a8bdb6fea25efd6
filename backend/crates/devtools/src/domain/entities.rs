//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::EmailJobId;

/// EmailJob entity - a background email delivery queued by a dev endpoint
#[derive(Debug, Clone)]
pub struct EmailJob {
    pub id: EmailJobId,
    pub to: String,
    pub subject: String,
    /// Template name resolved by the delivery worker
    pub template: String,
    pub created_at: DateTime<Utc>,
}

impl EmailJob {
    /// Create a new job with a fresh ID
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            id: EmailJobId::new(),
            to: to.into(),
            subject: subject.into(),
            template: template.into(),
            created_at: Utc::now(),
        }
    }
}
