use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::dto;
use crate::app::services::AppServices;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn model_info(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(dto::model_info_to_json(services.model()))
}
