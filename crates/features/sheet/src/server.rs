//! HTTP surface of the sheet backend.
//!
//! Every answer is a JSON envelope with `status` set to `success` or
//! `error`. Request bodies are parsed as JSON whatever their content type,
//! since browsers post `text/plain` in no-cors mode.

use crate::{Sheet, SheetError, SheetPayload, SheetRecord};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use rhub_domain::constants::SHEET_TAG;
use rhub_domain::partner::LookupQuery;
use rhub_kernel::server::ApiState;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::{IntoParams, ToSchema};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

const SAVED_MESSAGE: &str = "데이터가 성공적으로 저장되었습니다.";
const RUNNING_MESSAGE: &str = "시트 백엔드가 정상적으로 실행 중입니다.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Envelope shared by every sheet route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SheetResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Stamp of the appended row, or the current sheet time for health checks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<SheetRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl SheetResponse {
    fn success() -> Self {
        Self { status: ResponseStatus::Success, message: None, timestamp: None, data: None, count: None }
    }

    #[must_use]
    pub fn saved(timestamp: String) -> Self {
        Self { message: Some(SAVED_MESSAGE.to_owned()), timestamp: Some(timestamp), ..Self::success() }
    }

    #[must_use]
    pub fn running(timestamp: String) -> Self {
        Self { message: Some(RUNNING_MESSAGE.to_owned()), timestamp: Some(timestamp), ..Self::success() }
    }

    #[must_use]
    pub fn found(data: Vec<SheetRecord>) -> Self {
        Self { count: Some(data.len()), data: Some(data), ..Self::success() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { status: ResponseStatus::Error, message: Some(message.into()), ..Self::success() }
    }
}

impl IntoResponse for SheetError {
    fn into_response(self) -> Response {
        let status = if matches!(self, Self::Payload { .. }) {
            warn!(error = %self, "Sheet request rejected");
            StatusCode::BAD_REQUEST
        } else {
            error!(error = %self, "Sheet request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, Json(SheetResponse::error(self.to_string()))).into_response()
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct SheetParams {
    /// `search` to query rows; anything else is a health check
    action: Option<String>,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
}

fn sheet_of(state: &ApiState) -> Result<&Sheet, SheetError> {
    state
        .try_get_slice::<Sheet>()
        .map_err(|err| SheetError::Internal { message: err.to_string().into(), context: None })
}

#[utoipa::path(
    post,
    path = "/",
    request_body(content = SheetPayload, content_type = "text/plain", description = "Row fields as JSON"),
    responses(
        (status = OK, description = "Row appended", body = SheetResponse),
        (status = BAD_REQUEST, description = "Body is not a JSON object", body = SheetResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Row could not be stored", body = SheetResponse),
    ),
    tag = SHEET_TAG,
)]
pub(crate) async fn append_row(
    State(state): State<ApiState>,
    body: Bytes,
) -> Result<Json<SheetResponse>, SheetError> {
    let sheet = sheet_of(&state)?;
    let body = std::str::from_utf8(&body).map_err(|err| SheetError::Payload {
        message: err.to_string().into(),
        context: None,
    })?;

    let payload = SheetPayload::from_json(body)?;
    let timestamp = sheet.append(payload).await?;
    Ok(Json(SheetResponse::saved(timestamp)))
}

#[utoipa::path(
    get,
    path = "/",
    params(SheetParams),
    responses(
        (status = OK, description = "Search result or health check", body = SheetResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Sheet unavailable", body = SheetResponse),
    ),
    tag = SHEET_TAG,
)]
pub(crate) async fn read_sheet(
    State(state): State<ApiState>,
    Query(params): Query<SheetParams>,
) -> Result<Json<SheetResponse>, SheetError> {
    let sheet = sheet_of(&state)?;

    if params.action.as_deref() == Some("search") {
        let query = LookupQuery { name: params.name, phone: params.phone, email: params.email };
        return Ok(Json(SheetResponse::found(sheet.search(&query).await)));
    }

    Ok(Json(SheetResponse::running(sheet.timestamp(Utc::now()))))
}

/// Sheet routes, mounted at the server root.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(append_row, read_sheet))
}
