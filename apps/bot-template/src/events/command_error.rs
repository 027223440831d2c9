//! Turns command failures into user-facing embeds.
//!
//! Known categories get exactly one reply in the invoking channel. Whatever
//! happens, the original error is handed on to [`report`] afterwards, so the
//! log still records it.

use crate::error::Error;
use crate::utils::{embeds, permissions};
use crate::Data;
use poise::FrameworkError;
use serenity::all::{CreateEmbed, Permissions};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, warn};

/// A command failure the bot knows how to explain to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandFailure {
    Cooldown { remaining: Duration },
    Blacklisted,
    NotOwner,
    MissingUserPermissions { missing: Vec<String> },
    MissingBotPermissions { missing: Vec<String> },
    MissingArgument { message: String },
}

/// Title and description of the embed sent for a [`CommandFailure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: String,
}

impl Notice {
    pub fn embed(&self) -> CreateEmbed {
        embeds::error_embed()
            .title(self.title)
            .description(&self.description)
    }
}

impl CommandFailure {
    /// Match `error` against the known categories, in priority order.
    pub fn classify(error: &FrameworkError<'_, Data, Error>) -> Option<Self> {
        match error {
            FrameworkError::CooldownHit {
                remaining_cooldown, ..
            } => Some(Self::Cooldown {
                remaining: *remaining_cooldown,
            }),
            FrameworkError::CommandCheckFailed { error, .. } => {
                Self::from_check_error(error.as_ref())
            }
            FrameworkError::NotAnOwner { .. } => Some(Self::NotOwner),
            FrameworkError::MissingUserPermissions {
                missing_permissions,
                ..
            } => Some(Self::from_missing_user_permissions(*missing_permissions)),
            FrameworkError::MissingBotPermissions {
                missing_permissions,
                ..
            } => Some(Self::from_missing_bot_permissions(*missing_permissions)),
            FrameworkError::ArgumentParse { error, .. } => Self::from_argument_error(error.as_ref()),
            _ => None,
        }
    }

    /// `None` when the framework could not resolve the member's permissions.
    pub fn from_missing_user_permissions(missing: Option<Permissions>) -> Self {
        Self::MissingUserPermissions {
            missing: missing
                .map(permissions::permission_names)
                .unwrap_or_default(),
        }
    }

    pub fn from_missing_bot_permissions(missing: Permissions) -> Self {
        Self::MissingBotPermissions {
            missing: permissions::permission_names(missing),
        }
    }

    /// Only an omitted mandatory argument is explained; other parse failures
    /// (bad input, HTTP lookups, malformed code blocks) are not.
    pub fn from_argument_error(error: &(dyn std::error::Error + Send + Sync + 'static)) -> Option<Self> {
        is_missing_argument(error).then(|| Self::MissingArgument {
            message: error.to_string(),
        })
    }

    /// Classify the error a failing command check returned.
    pub fn from_check_error(error: Option<&Error>) -> Option<Self> {
        match error? {
            Error::UserBlacklisted => Some(Self::Blacklisted),
            Error::UserNotOwner => Some(Self::NotOwner),
            _ => None,
        }
    }

    pub fn notice(&self) -> Notice {
        let (title, description) = match self {
            Self::Cooldown { remaining } => (
                "Hey, please slow down!",
                format!(
                    "You can use this command again in {}.",
                    format_remaining(*remaining)
                ),
            ),
            Self::Blacklisted => (
                "Error!",
                "You are blacklisted from using the bot.".to_string(),
            ),
            Self::NotOwner => ("Error!", "You are not the owner of the bot!".to_string()),
            Self::MissingUserPermissions { missing } if missing.is_empty() => (
                "Error!",
                "You are missing the permissions required to execute this command!".to_string(),
            ),
            Self::MissingUserPermissions { missing } => (
                "Error!",
                format!(
                    "You are missing the permission(s) `{}` to execute this command!",
                    missing.join(", ")
                ),
            ),
            Self::MissingBotPermissions { missing } => (
                "Error!",
                format!(
                    "I am missing the permission(s) `{}` to fully perform this command!",
                    missing.join(", ")
                ),
            ),
            // Argument names are lowercase in code.
            Self::MissingArgument { message } => ("Error!", capitalize(message)),
        };

        Notice { title, description }
    }
}

fn is_missing_argument(error: &(dyn std::error::Error + Send + Sync + 'static)) -> bool {
    error.is::<poise::TooFewArguments>()
}

/// Spell out a cooldown as hours, minutes and seconds, skipping zero parts.
pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.as_secs_f64().round() as u64;
    let units = [
        (total / 3600, "hour"),
        (total % 3600 / 60, "minute"),
        (total % 60, "second"),
    ];

    let parts: Vec<String> = units
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| {
            let plural = if n == 1 { "" } else { "s" };
            format!("{n} {unit}{plural}")
        })
        .collect();

    if parts.is_empty() {
        "a moment".to_string()
    } else {
        parts.join(" ")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Send at most one notice for `failure`, then give `error` back unchanged.
pub async fn render_then_return<T, F, Fut>(failure: Option<CommandFailure>, error: T, send: F) -> T
where
    F: FnOnce(Notice) -> Fut,
    Fut: Future<Output = Result<(), Error>>,
{
    if let Some(failure) = failure {
        if let Err(e) = send(failure.notice()).await {
            warn!(error = %e, "Failed to send error notice");
        }
    }
    error
}

/// `on_error` hook for the framework.
pub async fn on_error(error: FrameworkError<'_, Data, Error>) {
    let failure = CommandFailure::classify(&error);
    let ctx = error.ctx();

    let error = render_then_return(failure, error, |notice| async move {
        if let Some(ctx) = ctx {
            ctx.send(poise::CreateReply::default().embed(notice.embed()))
                .await?;
        }
        Ok(())
    })
    .await;

    report(&error);
}

/// Log a framework error once, at a level matching its severity.
fn report(error: &FrameworkError<'_, Data, Error>) {
    let command = error.ctx().map(|ctx| ctx.command().qualified_name.clone());

    match error {
        FrameworkError::Command { error: inner, .. } => {
            error!(command = ?command, error = %inner, "Command error");
        }
        FrameworkError::Setup { error: inner, .. }
        | FrameworkError::EventHandler { error: inner, .. } => {
            error!(error = %inner, "{}", error);
        }
        FrameworkError::CommandPanic { payload, .. } => {
            error!(command = ?command, payload = ?payload, "Command panicked");
        }
        FrameworkError::CommandCheckFailed { error: None, .. }
        | FrameworkError::UnknownCommand { .. }
        | FrameworkError::UnknownInteraction { .. } => {
            debug!(command = ?command, error = %error, "Ignored invocation");
        }
        _ => {
            warn!(command = ?command, error = %error, "Command failed");
        }
    }
}
