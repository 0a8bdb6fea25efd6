//! Repository Traits
//!
//! Interfaces for shared storage and the email spool. Implementations live
//! in the infrastructure layer.

use crate::domain::entities::EmailJob;
use crate::error::DevToolsResult;

/// Counter repository trait
#[trait_variant::make(CounterRepository: Send)]
pub trait LocalCounterRepository {
    /// Atomically increment the named counter and return the new value
    async fn increment(&self, key: &str) -> DevToolsResult<i64>;
}

/// Fixture repository trait - test data management
#[trait_variant::make(FixtureRepository: Send)]
pub trait LocalFixtureRepository {
    /// Empty the given tables in one statement. An external test script
    /// calls this through the API before seeding its own fixtures.
    async fn truncate_all(&self, tables: &[String]) -> DevToolsResult<()>;
}

/// Email spool trait - non-blocking handoff to a background worker
#[trait_variant::make(EmailSpool: Send)]
pub trait LocalEmailSpool {
    /// Enqueue a job for background delivery. Must not wait for delivery.
    async fn spool(&self, job: EmailJob) -> DevToolsResult<()>;
}
