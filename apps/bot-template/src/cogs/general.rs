use crate::config::Config;
use crate::utils::embeds;
use crate::{Command, Context};

type Error = crate::error::Error;

pub fn setup(_config: &Config) -> Result<Vec<Command>, Error> {
    Ok(vec![ping(), botinfo(), serverinfo(), help()])
}

/// Check bot latency.
#[poise::command(slash_command, prefix_command, category = "General", user_cooldown = 5)]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let start = std::time::Instant::now();
    let msg = ctx.say("Pong!").await?;
    let api_latency = start.elapsed().as_millis();

    let embed = embeds::primary_embed().title("🏓 Pong!").field(
        "API Latency",
        format!("{}ms", api_latency),
        true,
    );

    msg.edit(ctx, poise::CreateReply::default().content("").embed(embed))
        .await?;

    Ok(())
}

/// Show bot info.
#[poise::command(slash_command, prefix_command, category = "General")]
pub async fn botinfo(ctx: Context<'_>) -> Result<(), Error> {
    let data = ctx.data();
    let uptime = data.start_time.elapsed();
    let hours = uptime.as_secs() / 3600;
    let minutes = (uptime.as_secs() % 3600) / 60;
    let seconds = uptime.as_secs() % 60;

    let extensions = if data.extensions.is_empty() {
        "none".to_string()
    } else {
        data.extensions.join(", ")
    };

    let embed = embeds::primary_embed()
        .title("Bot Information")
        .field("Version", &data.config.bot_version, true)
        .field("Uptime", format!("{hours}h {minutes}m {seconds}s"), true)
        .field(
            "Prefix",
            format!("/ (Slash Commands) or {} for normal commands", data.config.prefix),
            false,
        )
        .field("Extensions", extensions, false);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Show server info and stats.
#[poise::command(slash_command, prefix_command, category = "General", guild_only)]
pub async fn serverinfo(ctx: Context<'_>) -> Result<(), Error> {
    let guild = ctx.guild().map(|g| {
        (
            g.name.clone(),
            g.member_count,
            g.channels.len(),
            g.roles.len(),
            g.id.created_at(),
        )
    });

    let embed = if let Some((name, member_count, channels, roles, created_at)) = guild {
        embeds::primary_embed()
            .title(format!("{name} Server Info"))
            .field("Members", member_count.to_string(), true)
            .field("Channels", channels.to_string(), true)
            .field("Roles", roles.to_string(), true)
            .field(
                "Created",
                format!("<t:{}:R>", created_at.unix_timestamp()),
                true,
            )
    } else {
        embeds::error_embed()
            .title("Error!")
            .description("Could not fetch server information.")
    };

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// List all available commands.
#[poise::command(slash_command, prefix_command, category = "General")]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Command to get help for"]
    #[autocomplete = "poise::builtins::autocomplete_command"]
    command: Option<String>,
) -> Result<(), Error> {
    poise::builtins::help(
        ctx,
        command.as_deref(),
        poise::builtins::HelpConfiguration {
            extra_text_at_bottom: "Use the prefix or a mention for text commands.",
            show_context_menu_commands: true,
            ..Default::default()
        },
    )
    .await?;
    Ok(())
}
