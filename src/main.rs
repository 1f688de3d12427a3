use std::sync::Arc;

use tracing::{error, info};

use roblink::config::VerifyConfig;
use roblink::discord;
use roblink::domain::registry::CodeRegistry;
use roblink::router::build_router;
use roblink::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = VerifyConfig::from_env();
    let registry = Arc::new(CodeRegistry::new());

    let mut bot = discord::build_client(&config.discord_bot_token, Arc::clone(&registry))
        .await
        .expect("failed to build Discord client");
    tokio::spawn(async move {
        if let Err(e) = bot.start().await {
            error!(error = %e, "discord client error");
        }
    });

    let router = build_router(AppState::new(registry));
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("verification server listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
