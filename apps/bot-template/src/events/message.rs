use serenity::all::UserId;

/// Whether a message by this author may reach command dispatch.
///
/// Messages from the bot's own account or any other bot never do.
pub fn is_dispatchable(author_id: UserId, author_is_bot: bool, self_id: UserId) -> bool {
    !author_is_bot && author_id != self_id
}
