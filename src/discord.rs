use std::sync::Arc;

use serenity::all::{
    Client, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    EditInteractionResponse, EventHandler, GatewayIntents, Interaction, Ready,
};
use serenity::async_trait;
use tracing::{error, info};

use crate::domain::registry::{CodeRegistry, RedeemOutcome};

const SUCCESS_REPLY: &str = "✅ Success! Your account is now verified.";
const INVALID_CODE_REPLY: &str = "❌ Error: Invalid or expired code.";
const INTERNAL_ERROR_REPLY: &str = "❌ An internal error occurred. Please try again later.";

/// Gateway event handler for the `/verify` slash command.
///
/// Redemption goes straight to the shared registry; there is no HTTP hop back
/// into the process.
pub struct Handler {
    registry: Arc<CodeRegistry>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(bot = %ready.user.name, "discord bot connected");
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        if command.data.name != "verify" {
            return;
        }

        let discord_id = command.user.id.to_string();
        let discord_tag = command.user.tag();

        // Defer with an ephemeral reply, then edit it with the outcome.
        let defer = CreateInteractionResponse::Defer(
            CreateInteractionResponseMessage::new().ephemeral(true),
        );
        if let Err(e) = command.create_response(&ctx.http, defer).await {
            error!(error = %e, "failed to defer verify reply");
            return;
        }

        let code = command
            .data
            .options
            .iter()
            .find(|opt| opt.name == "code")
            .and_then(|opt| opt.value.as_str());

        let reply = match code {
            Some(code) => match self.registry.redeem(code, &discord_id, &discord_tag) {
                RedeemOutcome::Linked(_) => SUCCESS_REPLY,
                RedeemOutcome::InvalidCode => INVALID_CODE_REPLY,
            },
            // The option is registered as required; its absence means the
            // interaction payload is malformed.
            None => INTERNAL_ERROR_REPLY,
        };

        let edit = EditInteractionResponse::new().content(reply);
        if let Err(e) = command.edit_response(&ctx.http, edit).await {
            error!(error = %e, "failed to edit verify reply");
        }
    }
}

/// Build the gateway client. The caller is responsible for starting it.
pub async fn build_client(
    token: &str,
    registry: Arc<CodeRegistry>,
) -> serenity::Result<Client> {
    Client::builder(token, GatewayIntents::GUILDS)
        .event_handler(Handler { registry })
        .await
}
