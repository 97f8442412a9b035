use sweetshop_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sweetshop_observability::init();

    let config = Config::from_env();
    let app = sweetshop_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
