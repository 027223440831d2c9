use crate::error::Error;
use crate::events::message::is_dispatchable;
use crate::Context;

/// Global check run before every command.
///
/// Invocations by bot accounts are dropped without a reply; blacklisted users
/// get [`Error::UserBlacklisted`].
pub async fn dispatch_allowed(ctx: Context<'_>) -> Result<bool, Error> {
    let author = ctx.author();
    let self_id = ctx.framework().bot_id;
    if !is_dispatchable(author.id, author.bot, self_id) {
        return Ok(false);
    }

    if crate::db::is_blacklisted(&ctx.data().db, author.id).await? {
        return Err(Error::UserBlacklisted);
    }

    Ok(true)
}

/// Per-command check for owner-only commands.
pub async fn is_owner(ctx: Context<'_>) -> Result<bool, Error> {
    if ctx.framework().options().owners.contains(&ctx.author().id) {
        Ok(true)
    } else {
        Err(Error::UserNotOwner)
    }
}
