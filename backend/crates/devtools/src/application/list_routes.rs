//! List Routes Use Case

use crate::application::config::DevToolsConfig;
use crate::domain::catalog::{RouteCatalog, RouteEntry};
use crate::error::{DevToolsError, DevToolsResult};
use std::sync::Arc;

/// List Routes Use Case
///
/// Returns the registered routes so callers do not have to maintain a
/// separate API document. Rejected in production.
pub struct ListRoutesUseCase {
    catalog: Arc<RouteCatalog>,
    config: Arc<DevToolsConfig>,
}

impl ListRoutesUseCase {
    pub fn new(catalog: Arc<RouteCatalog>, config: Arc<DevToolsConfig>) -> Self {
        Self { catalog, config }
    }

    pub fn execute(&self) -> DevToolsResult<Vec<RouteEntry>> {
        if self.config.environment.is_production() {
            return Err(DevToolsError::DisabledInProduction);
        }

        tracing::debug!(routes = self.catalog.len(), "Listing registered routes");

        Ok(self.catalog.sorted_entries())
    }
}
