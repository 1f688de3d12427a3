//! One-shot administrative tool: registers the `verify` slash command with
//! its required `code` argument against the target guild.

use serenity::all::{ApplicationId, CommandOptionType, CreateCommand, CreateCommandOption, GuildId};
use serenity::http::Http;
use tracing::{error, info};

use roblink::config::RegisterConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = RegisterConfig::from_env();

    let http = Http::new(&config.discord_bot_token);
    http.set_application_id(ApplicationId::new(config.client_id));

    let verify = CreateCommand::new("verify")
        .description("Verifies your Roblox account with a code.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "code",
                "The 6-digit code you received in-game.",
            )
            .required(true),
        );

    info!("refreshing application commands");
    match GuildId::new(config.guild_id)
        .set_commands(&http, vec![verify])
        .await
    {
        Ok(commands) => info!(count = commands.len(), "registered application commands"),
        Err(e) => {
            error!(error = %e, "failed to register application commands");
            std::process::exit(1);
        }
    }
}
