use crate::config::Config;
use crate::utils::embeds;
use crate::{Command, Context};
use serenity::all::{GetMessages, MessageId, User};
use tracing::info;

type Error = crate::error::Error;

pub fn setup(_config: &Config) -> Result<Vec<Command>, Error> {
    Ok(vec![kick(), purge()])
}

/// Kick a user out of the server.
#[poise::command(
    slash_command,
    prefix_command,
    category = "Moderation",
    guild_only,
    required_permissions = "KICK_MEMBERS",
    required_bot_permissions = "KICK_MEMBERS"
)]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "The user that should be kicked"] user: User,
    #[rest]
    #[description = "The reason why the user should be kicked"]
    reason: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };
    let reason = reason.unwrap_or_else(|| "Not specified".to_string());

    guild_id
        .kick_with_reason(ctx.http(), user.id, &reason)
        .await?;
    info!(guild_id = %guild_id, user_id = %user.id, moderator = %ctx.author().id, "Kicked member");

    let embed = embeds::success_embed()
        .description(format!(
            "**{}** was kicked by **{}**!",
            user.name,
            ctx.author().name
        ))
        .field("Reason:", reason, false);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Delete a number of recent messages in this channel.
#[poise::command(
    slash_command,
    prefix_command,
    category = "Moderation",
    guild_only,
    guild_cooldown = 10,
    required_permissions = "MANAGE_MESSAGES",
    required_bot_permissions = "MANAGE_MESSAGES"
)]
pub async fn purge(
    ctx: Context<'_>,
    #[description = "The amount of messages that should be deleted"]
    #[min = 1]
    #[max = 100]
    amount: u8,
) -> Result<(), Error> {
    ctx.defer().await?;

    let channel_id = ctx.channel_id();
    let ids: Vec<MessageId> = channel_id
        .messages(ctx.http(), GetMessages::new().limit(amount))
        .await?
        .iter()
        .map(|m| m.id)
        .collect();

    match ids.as_slice() {
        [] => {}
        [only] => channel_id.delete_message(ctx.http(), *only).await?,
        _ => channel_id.delete_messages(ctx.http(), &ids).await?,
    }

    let embed = embeds::success_embed().description(format!(
        "**{}** cleared **{}** messages!",
        ctx.author().name,
        ids.len()
    ));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
