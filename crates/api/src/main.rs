use anyhow::Context;

use medstock_api::app::{build_app, build_services};
use medstock_api::config::ServiceConfig;
use medstock_core::HospitalInventoryEnv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    medstock_observability::init();

    let config = ServiceConfig::from_env().context("invalid service configuration")?;
    let env = HospitalInventoryEnv::default();
    tracing::info!(
        bind_addr = %config.bind_addr,
        artifact = %config.artifact_path.display(),
        policy = ?config.policy_kind,
        observation_dim = env.observation_dim(),
        n_actions = env.n_actions(),
        "starting medstock policy service"
    );

    let services = build_services(&config, env).map_err(|e| {
        tracing::error!(error = %e, "failed to load policy");
        e
    })?;
    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
