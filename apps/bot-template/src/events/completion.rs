use crate::Context;
use serenity::all::{GuildId, UserId};
use tracing::info;

/// One command occurrence, as seen after it finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub author: String,
    pub author_id: UserId,
    pub guild: Option<(String, GuildId)>,
}

impl Invocation {
    pub fn from_context(ctx: Context<'_>) -> Self {
        let guild = ctx.guild_id().map(|id| {
            let name = ctx
                .guild()
                .map(|g| g.name.clone())
                .unwrap_or_else(|| "unknown guild".to_string());
            (name, id)
        });

        Self {
            command: top_level_name(&ctx.command().qualified_name).to_string(),
            author: ctx.author().tag(),
            author_id: ctx.author().id,
            guild,
        }
    }

    pub fn describe(&self) -> String {
        match &self.guild {
            Some((name, id)) => format!(
                "Executed {} command in {} (ID: {}) by {} (ID: {})",
                self.command, name, id, self.author, self.author_id
            ),
            None => format!(
                "Executed {} command by {} (ID: {}) in DMs",
                self.command, self.author, self.author_id
            ),
        }
    }
}

fn top_level_name(qualified_name: &str) -> &str {
    qualified_name.split(' ').next().unwrap_or(qualified_name)
}

/// `post_command` hook: audit log of every successful command.
pub async fn on_command_completion(ctx: Context<'_>) {
    let invocation = Invocation::from_context(ctx);
    info!(
        command = %invocation.command,
        user_id = %invocation.author_id,
        guild_id = ?invocation.guild.as_ref().map(|(_, id)| *id),
        "{}",
        invocation.describe()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(guild: Option<(String, GuildId)>) -> Invocation {
        Invocation {
            command: top_level_name("blacklist add").to_string(),
            author: "someone".to_string(),
            author_id: UserId::new(10),
            guild,
        }
    }

    #[test]
    fn subcommands_are_logged_by_their_parent() {
        assert_eq!(top_level_name("blacklist add"), "blacklist");
        assert_eq!(top_level_name("ping"), "ping");
    }

    #[test]
    fn describes_guild_invocations() {
        let line = invocation(Some(("Den".to_string(), GuildId::new(5)))).describe();
        assert_eq!(
            line,
            "Executed blacklist command in Den (ID: 5) by someone (ID: 10)"
        );
    }

    #[test]
    fn describes_direct_messages() {
        let line = invocation(None).describe();
        assert_eq!(line, "Executed blacklist command by someone (ID: 10) in DMs");
    }
}
