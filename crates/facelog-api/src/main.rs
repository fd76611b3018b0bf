use facelog_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    facelog_api::init_tracing();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (database, storage, detector, routes)
    let (_state, router) = facelog_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    facelog_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
