//! API DTOs (Data Transfer Objects)

use serde::Serialize;
use uuid::Uuid;

/// Response for GET /apitest/sendemail
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
    pub reply: String,
    pub job_id: Uuid,
}

/// Response for GET /apitest/counter
#[derive(Debug, Clone, Serialize)]
pub struct CounterResponse {
    pub counter: i64,
}

/// Response for POST /apitest/dbtruncate - an empty JSON object
#[derive(Debug, Clone, Serialize)]
pub struct TruncateResponse {}
