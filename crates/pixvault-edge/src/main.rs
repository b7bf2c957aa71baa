use pixvault_core::EdgeConfig;

// Use mimalloc as the global allocator for better performance and lower fragmentation,
// especially when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = EdgeConfig::from_env()?;

    let (_state, router) = pixvault_edge::setup::initialize_app(config.clone()).await?;

    pixvault_edge::setup::server::start_server(&config, router).await?;

    Ok(())
}
