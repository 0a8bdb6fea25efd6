//! Development & Test Endpoints
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, route catalog, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Database repository, email spool
//! - `presentation/` - HTTP handlers, DTOs, HTML pages
//!
//! ## Safety Model
//! - Every endpoint here is a development convenience, never part of the
//!   public API surface
//! - The route listing is rejected outright in production deployments
//! - Table truncation is only registered on the router in local deployments
//!   and double-checked inside the use case
//! - Table names come from configuration and are validated as identifiers
//!   before they reach SQL

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{DevToolsConfig, Environment};
pub use domain::catalog::{RouteCatalog, RouteEntry};
pub use error::{DevToolsError, DevToolsResult};
pub use infra::mailer::SpooledMailer;
pub use infra::postgres::PgDevRepository;
pub use presentation::router::{dev_router, dev_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};
