use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Discord(#[from] Box<serenity::Error>),

    #[error("'{}' not found! Please add it and try again.", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Extension(String),

    #[error("User is blacklisted")]
    UserBlacklisted,

    #[error("User is not an owner of the bot")]
    UserNotOwner,
}

impl From<serenity::Error> for Error {
    fn from(err: serenity::Error) -> Self {
        Error::Discord(Box::new(err))
    }
}

impl Error {
    /// Short category name. `Display` carries only the detail, so diagnostics
    /// read `"<kind>: <detail>"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Discord(_) => "DiscordError",
            Error::ConfigNotFound(_) => "ConfigNotFound",
            Error::Config(_) => "ConfigError",
            Error::Database(_) => "DatabaseError",
            Error::Io { .. } => "IoError",
            Error::Extension(_) => "ExtensionError",
            Error::UserBlacklisted => "UserBlacklisted",
            Error::UserNotOwner => "UserNotOwner",
        }
    }
}
