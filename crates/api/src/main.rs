use anyhow::Context;

use searchsync_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    searchsync_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = searchsync_api::app::build_app(config.engine);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        orphan_policy = ?config.engine.orphan_policy,
        "listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
