use crate::config::Config;
use crate::utils::embeds;
use crate::{db, Command, Context};
use serenity::all::User;
use tracing::info;

type Error = crate::error::Error;

pub fn setup(_config: &Config) -> Result<Vec<Command>, Error> {
    Ok(vec![blacklist(), sync()])
}

#[derive(Debug, poise::ChoiceParameter)]
pub enum SyncScope {
    Global,
    Guild,
}

/// Synchronize slash commands with Discord.
#[poise::command(prefix_command, category = "Owner", check = "crate::checks::is_owner")]
pub async fn sync(
    ctx: Context<'_>,
    #[description = "Where to register the commands: global or guild"] scope: SyncScope,
) -> Result<(), Error> {
    let commands = &ctx.framework().options().commands;

    let description = match scope {
        SyncScope::Global => {
            poise::builtins::register_globally(ctx.serenity_context(), commands).await?;
            "Slash commands have been globally synchronized.".to_string()
        }
        SyncScope::Guild => {
            let Some(guild_id) = ctx.guild_id() else {
                let embed = embeds::error_embed()
                    .title("Error!")
                    .description("Guild sync has to be run inside a server.");
                ctx.send(poise::CreateReply::default().embed(embed)).await?;
                return Ok(());
            };
            poise::builtins::register_in_guild(ctx.serenity_context(), commands, guild_id).await?;
            "Slash commands have been synchronized in this guild.".to_string()
        }
    };
    info!(scope = ?scope, "Slash commands synchronized");

    let embed = embeds::primary_embed().description(description);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Manage users who may not use the bot.
#[poise::command(
    slash_command,
    prefix_command,
    category = "Owner",
    check = "crate::checks::is_owner",
    subcommands("blacklist_show", "blacklist_add", "blacklist_remove"),
    subcommand_required
)]
pub async fn blacklist(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Show the list of blacklisted users.
#[poise::command(
    slash_command,
    prefix_command,
    rename = "show",
    check = "crate::checks::is_owner"
)]
pub async fn blacklist_show(ctx: Context<'_>) -> Result<(), Error> {
    let users = db::blacklisted_users(&ctx.data().db).await?;

    let embed = if users.is_empty() {
        embeds::primary_embed().description("There are currently no blacklisted users.")
    } else {
        let list: Vec<String> = users.iter().map(|id| format!("<@{id}> ({id})")).collect();
        embeds::primary_embed()
            .title("Blacklisted Users")
            .description(list.join("\n"))
    };

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Prevent a user from using the bot.
#[poise::command(
    slash_command,
    prefix_command,
    rename = "add",
    check = "crate::checks::is_owner"
)]
pub async fn blacklist_add(
    ctx: Context<'_>,
    #[description = "The user that should be added to the blacklist"] user: User,
) -> Result<(), Error> {
    let embed = if db::add_to_blacklist(&ctx.data().db, user.id).await? {
        info!(user_id = %user.id, "User blacklisted");
        embeds::success_embed().description(format!(
            "**{}** has been successfully added to the blacklist",
            user.name
        ))
    } else {
        embeds::error_embed().description(format!("**{}** is already in the blacklist.", user.name))
    };

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Allow a blacklisted user to use the bot again.
#[poise::command(
    slash_command,
    prefix_command,
    rename = "remove",
    check = "crate::checks::is_owner"
)]
pub async fn blacklist_remove(
    ctx: Context<'_>,
    #[description = "The user that should be removed from the blacklist"] user: User,
) -> Result<(), Error> {
    let embed = if db::remove_from_blacklist(&ctx.data().db, user.id).await? {
        info!(user_id = %user.id, "User removed from blacklist");
        embeds::success_embed().description(format!(
            "**{}** has been successfully removed from the blacklist",
            user.name
        ))
    } else {
        embeds::error_embed().description(format!("**{}** is not in the blacklist.", user.name))
    };

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
