use anyhow::Context;
use uml_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    log::info!("listening on http://{}", config.bind_addr);

    axum::serve(listener, uml_server::app()).await.context("server stopped")?;
    Ok(())
}
