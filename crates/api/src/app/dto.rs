use serde::Serialize;

use medstock_core::Action;

use crate::app::services::ModelInfo;

// -------------------------
// Response DTOs
// -------------------------

/// `POST /predict/` success body: exactly one key.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub action: u32,
}

impl From<Action> for PredictResponse {
    fn from(action: Action) -> Self {
        Self { action: action.id() }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn model_info_to_json(info: &ModelInfo) -> serde_json::Value {
    serde_json::json!({
        "name": info.name,
        "algorithm": info.algorithm,
        "artifact": info.artifact.as_ref().map(|p| p.display().to_string()),
        "observation_dim": info.observation_dim,
        "n_actions": info.n_actions,
        "loaded_at": info.loaded_at.to_rfc3339(),
    })
}
