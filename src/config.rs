/// Verification service configuration loaded from environment variables.
#[derive(Debug)]
pub struct VerifyConfig {
    /// Discord bot token used by the gateway client.
    pub discord_bot_token: String,
    /// TCP port to listen on (default 3000). Env var: `PORT`.
    pub port: u16,
}

impl VerifyConfig {
    pub fn from_env() -> Self {
        Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN").expect("DISCORD_BOT_TOKEN"),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

/// Configuration for the one-shot `register-commands` tool.
///
/// `CLIENT_ID` is the Discord application id; `GUILD_ID` is the deployment
/// target guild the `verify` command is registered against.
#[derive(Debug)]
pub struct RegisterConfig {
    pub discord_bot_token: String,
    pub client_id: u64,
    pub guild_id: u64,
}

impl RegisterConfig {
    pub fn from_env() -> Self {
        Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN").expect("DISCORD_BOT_TOKEN"),
            client_id: std::env::var("CLIENT_ID")
                .expect("CLIENT_ID")
                .parse()
                .expect("CLIENT_ID must be a numeric application id"),
            guild_id: std::env::var("GUILD_ID")
                .expect("GUILD_ID")
                .parse()
                .expect("GUILD_ID must be a numeric guild id"),
        }
    }
}
