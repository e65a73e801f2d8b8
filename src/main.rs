use std::sync::Arc;

use pathmux::config::{AppState, Config};
use pathmux::routing::Router;
use pathmux::{handler, logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional first argument: config file path
    let cfg = match std::env::args().nth(1) {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    logger::init(&cfg)?;

    // Worker threads follow the config, CPU cores otherwise
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // All routes are registered before the table is shared
    let mut router = Router::new();
    handler::register_demo_routes(&mut router);
    handler::register_config_routes(&mut router, &cfg.routes);
    logger::log_routes(&router);

    let listener = server::create_reusable_listener(addr)?;
    logger::log_server_start(&addr, &cfg);

    let state = Arc::new(AppState::new(cfg, router));
    server::start_server_loop(listener, state, server::shutdown_signal()).await?;
    Ok(())
}
