use crate::api::ApiServer;
use crate::config::Config;
use anyhow::Result;
use tracing::info;

pub async fn run_service() -> Result<()> {
    info!("Starting Chatsift service");

    let config = Config::load()?;

    let api_server = ApiServer::new(&config)?;

    if config.upstream.endpoint.is_none() {
        info!("No upstream analysis endpoint configured; /analyze is disabled");
    }

    info!("Chatsift is ready!");
    info!("Test manually: curl -X POST http://127.0.0.1:{}/normalize -H 'Content-Type: application/json' -d '{{\"text\": \"14:32 Alice hello there\"}}'", config.server.port);

    api_server.start().await
}
