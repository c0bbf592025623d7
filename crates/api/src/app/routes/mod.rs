use axum::{
    Router,
    routing::{get, post},
};

pub mod predict;
pub mod system;

/// Router for the prediction endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/predict/", post(predict::predict))
        .route("/predict", post(predict::predict))
        .route("/model", get(system::model_info))
}
