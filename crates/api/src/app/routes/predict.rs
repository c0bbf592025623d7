use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use medstock_core::{FeatureVector, Observation};

use crate::app::extract::ValidJson;
use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn predict(
    Extension(services): Extension<Arc<AppServices>>,
    ValidJson(obs): ValidJson<Observation>,
) -> axum::response::Response {
    let features = FeatureVector::from_observation(&obs);

    match services.predict(features).await {
        Ok(action) => (StatusCode::OK, Json(dto::PredictResponse::from(action))).into_response(),
        Err(e) => errors::predict_error_to_response(e),
    }
}
