pub mod command_error;
pub mod completion;
pub mod message;

use crate::error::Error;
use crate::status::StatusRotator;
use crate::Data;
use serenity::all::{Context, FullEvent, Ready};
use tracing::info;

/// Runs once, on the first Ready event.
///
/// Logs startup diagnostics, starts the status rotator and registers slash
/// commands globally or in the configured guild.
pub async fn on_ready(
    ctx: &Context,
    ready: &Ready,
    framework: &poise::Framework<Data, Error>,
    data: Data,
) -> Result<Data, Error> {
    info!(bot = %ready.user.name, guilds = ready.guilds.len(), "Logged in as {}", ready.user.name);
    info!(
        version = %data.config.bot_version,
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        extensions = ?data.extensions,
        "Running bot-template on serenity/poise"
    );

    StatusRotator::new(data.config.statuses.clone()).spawn(ctx.clone());

    let commands = &framework.options().commands;
    if data.config.sync_commands_globally {
        info!("Syncing commands globally...");
        poise::builtins::register_globally(ctx, commands).await?;
    } else if let Some(guild_id) = data.config.guild_id {
        poise::builtins::register_in_guild(ctx, commands, guild_id).await?;
        info!(guild_id = %guild_id, "Slash commands registered to guild");
    } else {
        info!("Slash command registration skipped");
    }

    Ok(data)
}

/// Gateway events outside of command handling.
pub async fn handle_event(_ctx: &Context, event: &FullEvent, _data: &Data) {
    match event {
        FullEvent::Ready { data_about_bot } => {
            info!(session = %data_about_bot.session_id, "Gateway session ready");
        }
        FullEvent::Resume { .. } => {
            info!("Gateway session resumed");
        }
        _ => {}
    }
}
