use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use medstock_core::DomainError;

use crate::app::services::PredictError;

pub fn predict_error_to_response(err: PredictError) -> axum::response::Response {
    match err {
        PredictError::Input(DomainError::DimensionMismatch { expected, actual }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({
                "error": "dimension_mismatch",
                "message": format!("policy expects {expected} features, observation has {actual}"),
                "expected": expected,
                "actual": actual,
            })),
        )
            .into_response(),
        PredictError::Input(e) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", e.to_string())
        }
        PredictError::Policy(e) => {
            tracing::error!(error = %e, "policy inference failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "inference_failed", e.to_string())
        }
        PredictError::Aborted(msg) => {
            tracing::error!(error = %msg, "inference task aborted");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "inference_failed",
                "inference aborted",
            )
        }
    }
}

/// Any body that does not deserialize into the request type is a 422.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    let code = match &rejection {
        JsonRejection::JsonDataError(_) => "validation_error",
        JsonRejection::JsonSyntaxError(_) => "malformed_json",
        JsonRejection::MissingJsonContentType(_) => "unsupported_content_type",
        _ => "invalid_body",
    };
    json_error(StatusCode::UNPROCESSABLE_ENTITY, code, rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
