//! Dev Endpoints Router

use crate::application::config::DevToolsConfig;
use crate::domain::catalog::{RouteCatalog, RouteEntry};
use crate::domain::repository::{CounterRepository, EmailSpool, FixtureRepository};
use crate::infra::mailer::SpooledMailer;
use crate::infra::postgres::PgDevRepository;
use crate::presentation::handlers::{self, DevToolsState};
use axum::{
    Router,
    routing::{get, post},
};
use http::Method;
use std::sync::Arc;

/// Create the dev router with PostgreSQL repository and spooled mailer
pub fn dev_router(repo: PgDevRepository, mailer: SpooledMailer, config: DevToolsConfig) -> Router {
    dev_router_generic(repo, mailer, config, Vec::new())
}

/// Create a generic dev router for any repository and spool implementation
///
/// `app_routes` lets the host record its own routes so the listing at
/// `/api/list` covers the whole service.
pub fn dev_router_generic<R, M>(
    repo: R,
    mailer: M,
    config: DevToolsConfig,
    app_routes: Vec<RouteEntry>,
) -> Router
where
    R: CounterRepository + FixtureRepository + Clone + Send + Sync + 'static,
    M: EmailSpool + Clone + Send + Sync + 'static,
{
    let register_truncate = config.environment.is_local();

    let mut catalog = RouteCatalog::new();
    catalog.record(RouteEntry::new(
        Method::GET,
        "/api/list",
        "List the registered HTTP routes as HTML. Not available in production.",
    ));
    catalog.record(RouteEntry::new(
        Method::GET,
        "/apitest/sendemail",
        "For testing: spool an example background email task.",
    ));
    catalog.record(RouteEntry::new(
        Method::GET,
        "/apitest/counter",
        "For testing: increment the shared test counter.",
    ));
    catalog.record(RouteEntry::new(
        Method::GET,
        "/examplehtml",
        "For testing: example HTML page.",
    ));
    if register_truncate {
        catalog.record(
            RouteEntry::new(
                Method::POST,
                "/apitest/dbtruncate",
                "For testing: empty all data from the configured tables. \
                 Only accessible on a local dev machine.",
            )
            .dev_only(),
        );
    }
    catalog.extend(app_routes);

    let state = DevToolsState {
        repo: Arc::new(repo),
        mailer: Arc::new(mailer),
        config: Arc::new(config),
        catalog: Arc::new(catalog),
    };

    let mut router = Router::new()
        .route("/api/list", get(handlers::list_routes::<R, M>))
        .route("/apitest/sendemail", get(handlers::send_test_email::<R, M>))
        .route("/apitest/counter", get(handlers::bump_counter::<R, M>))
        .route("/examplehtml", get(handlers::example_html));

    if register_truncate {
        router = router.route(
            "/apitest/dbtruncate",
            post(handlers::truncate_tables::<R, M>),
        );
    }

    router.with_state(state)
}
