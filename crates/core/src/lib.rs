//! `medstock-core` — observation, feature and action primitives.
//!
//! This crate is **pure**: no I/O, no HTTP, no model loading. It defines the
//! shapes that flow between the API layer and the policy layer.

pub mod action;
pub mod environment;
pub mod error;
pub mod features;
pub mod observation;

pub use action::Action;
pub use environment::{HospitalInventoryEnv, ObservationParts};
pub use error::{DomainError, DomainResult};
pub use features::FeatureVector;
pub use observation::Observation;
