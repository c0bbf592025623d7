//! `medstock-policy`
//!
//! **Responsibility:** load a trained inventory policy and run inference on it.
//!
//! - It does not train, simulate, or mutate anything after loading.
//! - It maps a [`FeatureVector`](medstock_core::FeatureVector) to an
//!   [`Action`](medstock_core::Action), nothing more.

pub mod artifact;
pub mod error;
pub mod order_up_to;
pub mod policy;
pub mod q_network;

pub use artifact::{DenseLayerSpec, PolicyArtifact, load_policy, resolve_artifact_path};
pub use error::{ArtifactError, PolicyError};
pub use order_up_to::OrderUpToPolicy;
pub use policy::Policy;
pub use q_network::{DenseLayer, DqnPolicy, QNetwork};
