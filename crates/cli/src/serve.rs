use codata_core::config::CodataConfig;
use codata_server::AppState;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub fn run(config: CodataConfig) -> Result<(), Box<dyn std::error::Error>> {
    let handle = codata_runtime::build_default_service(&config)?;
    let state = AppState::from(handle);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let cancel_token = CancellationToken::new();

        let shutdown = cancel_token.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Ctrl-C received, shutting down");
                    shutdown.cancel();
                }
                Err(e) => warn!("Cannot listen for Ctrl-C: {}", e),
            }
        });

        codata_server::run_http_server(state, config.bind, cancel_token).await
    })
    .map_err(|e| e as Box<dyn std::error::Error>)
}
