//! Route Catalog
//!
//! axum keeps its routing table private, so the routes this service exposes
//! are recorded here as they are registered. The catalog feeds the HTML
//! listing at `/api/list` and stays in sync with the router because both are
//! built from the same entries.

use http::Method;

/// One registered HTTP route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: Method,
    pub path: String,
    /// One-line summary shown in the listing
    pub summary: String,
    /// True when the route is only registered in some environments
    pub dev_only: bool,
}

impl RouteEntry {
    pub fn new(method: Method, path: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            summary: summary.into(),
            dev_only: false,
        }
    }

    /// Mark the entry as environment-gated
    pub fn dev_only(mut self) -> Self {
        self.dev_only = true;
        self
    }
}

/// Catalog of registered routes
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    entries: Vec<RouteEntry>,
}

impl RouteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a registered route
    pub fn record(&mut self, entry: RouteEntry) {
        self.entries.push(entry);
    }

    /// Append routes registered elsewhere in the host application
    pub fn extend(&mut self, entries: impl IntoIterator<Item = RouteEntry>) {
        self.entries.extend(entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by path, then method
    pub fn sorted_entries(&self) -> Vec<RouteEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| {
            a.path
                .cmp(&b.path)
                .then_with(|| a.method.as_str().cmp(b.method.as_str()))
        });
        entries
    }
}
