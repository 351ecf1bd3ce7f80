use std::sync::Arc;

use content_analyzer::{
    AppState,
    config::{self, Credentials, ProviderSettings},
    routes,
    services::{provider::PerplexityClient, rate_limit::RequestGate, Analyzer},
};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "content_analyzer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = ProviderSettings::from_env();
    let credentials = Credentials::default();
    if credentials.resolve().is_err() {
        warn!("{} is not set; analysis requests will fail until it is", config::API_KEY_VAR);
    }

    let provider = Arc::new(PerplexityClient::new(&settings)?);
    let analyzer = Analyzer::new(provider, settings);
    let state = Arc::new(AppState::new(RequestGate::default(), analyzer, credentials));

    let sweeper = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweeper.gate.window());
        loop {
            interval.tick().await;
            let removed = sweeper.gate.sweep().await;
            if removed > 0 {
                debug!(removed, "swept idle rate-limit windows");
            }
        }
    });

    let addr = config::listen_addr()?;
    info!("Content analyzer running on http://{}", addr);
    warp::serve(routes(state)).run(addr).await;

    Ok(())
}
