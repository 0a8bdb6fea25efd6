//! HTTP Handlers

use crate::application::bump_counter::BumpCounterUseCase;
use crate::application::config::DevToolsConfig;
use crate::application::list_routes::ListRoutesUseCase;
use crate::application::send_test_email::SendTestEmailUseCase;
use crate::application::truncate_tables::TruncateTablesUseCase;
use crate::domain::catalog::RouteCatalog;
use crate::domain::repository::{CounterRepository, EmailSpool, FixtureRepository};
use crate::error::DevToolsResult;
use crate::presentation::dto::{CounterResponse, SendEmailResponse, TruncateResponse};
use crate::presentation::pages;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use chrono::Utc;
use std::sync::Arc;

/// Shared state for dev endpoint handlers
#[derive(Clone)]
pub struct DevToolsState<R, M>
where
    R: CounterRepository + FixtureRepository + Clone + Send + Sync + 'static,
    M: EmailSpool + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub mailer: Arc<M>,
    pub config: Arc<DevToolsConfig>,
    pub catalog: Arc<RouteCatalog>,
}

/// GET /api/list
pub async fn list_routes<R, M>(
    State(state): State<DevToolsState<R, M>>,
) -> DevToolsResult<Html<String>>
where
    R: CounterRepository + FixtureRepository + Clone + Send + Sync + 'static,
    M: EmailSpool + Clone + Send + Sync + 'static,
{
    let use_case = ListRoutesUseCase::new(state.catalog.clone(), state.config.clone());

    let entries = use_case.execute()?;

    Ok(Html(pages::render_api_listing(&entries)))
}

/// POST /apitest/dbtruncate
pub async fn truncate_tables<R, M>(
    State(state): State<DevToolsState<R, M>>,
) -> DevToolsResult<impl IntoResponse>
where
    R: CounterRepository + FixtureRepository + Clone + Send + Sync + 'static,
    M: EmailSpool + Clone + Send + Sync + 'static,
{
    let use_case = TruncateTablesUseCase::new(state.repo.clone(), state.config.clone());

    use_case.execute().await?;

    Ok((StatusCode::OK, Json(TruncateResponse {})))
}

/// GET /apitest/sendemail
pub async fn send_test_email<R, M>(
    State(state): State<DevToolsState<R, M>>,
) -> DevToolsResult<Json<SendEmailResponse>>
where
    R: CounterRepository + FixtureRepository + Clone + Send + Sync + 'static,
    M: EmailSpool + Clone + Send + Sync + 'static,
{
    let use_case = SendTestEmailUseCase::new(state.mailer.clone(), state.config.clone());

    let job = use_case.execute().await?;

    Ok(Json(SendEmailResponse {
        reply: "background task will start".to_string(),
        job_id: job.id.into_uuid(),
    }))
}

/// GET /apitest/counter
pub async fn bump_counter<R, M>(
    State(state): State<DevToolsState<R, M>>,
) -> DevToolsResult<Json<CounterResponse>>
where
    R: CounterRepository + FixtureRepository + Clone + Send + Sync + 'static,
    M: EmailSpool + Clone + Send + Sync + 'static,
{
    let use_case = BumpCounterUseCase::new(state.repo.clone(), state.config.clone());

    let counter = use_case.execute().await?;

    Ok(Json(CounterResponse { counter }))
}

/// GET /examplehtml
pub async fn example_html() -> Html<String> {
    Html(pages::render_example_page(Utc::now()))
}
