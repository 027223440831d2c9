use crate::error::Error;
use serde::Deserialize;
use serenity::all::{GuildId, UserId};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub prefix: String,
    pub sync_commands_globally: bool,
    #[serde(default)]
    pub owners: Vec<u64>,
    #[serde(default)]
    pub guild_id: Option<GuildId>,
    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    #[serde(default = "default_schema_path")]
    pub schema_path: PathBuf,
    #[serde(skip, default = "default_bot_version")]
    pub bot_version: String,
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// Required keys:
    /// - `prefix` — Prefix for text commands
    /// - `sync_commands_globally` — Register slash commands globally on ready
    ///
    /// Optional keys:
    /// - `owners` — User IDs allowed to run owner commands
    /// - `guild_id` — Guild to register slash commands in when not syncing globally
    /// - `statuses` — Presence texts rotated every minute
    /// - `database_path` / `schema_path` — SQLite file and schema script
    ///
    /// `GUILD_ID` in the environment overrides `guild_id`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_json(&raw)?;
        if let Some(guild_id) = parse_optional_id::<GuildId>("GUILD_ID")? {
            config.guild_id = Some(guild_id);
        }
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, Error> {
        serde_json::from_str(raw).map_err(|e| Error::Config(format!("Invalid config file: {e}")))
    }

    pub fn owner_ids(&self) -> HashSet<UserId> {
        self.owners.iter().copied().map(UserId::new).collect()
    }
}

fn default_statuses() -> Vec<String> {
    vec!["In Beta v0.1.0".to_string()]
}

fn default_database_path() -> PathBuf {
    PathBuf::from("database/database.db")
}

fn default_schema_path() -> PathBuf {
    PathBuf::from("database/schema.sql")
}

fn default_bot_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn parse_optional_id<T>(var: &str) -> Result<Option<T>, Error>
where
    T: From<u64>,
{
    match std::env::var(var) {
        Ok(val) if !val.trim().is_empty() => {
            let id = val
                .trim()
                .parse::<u64>()
                .map_err(|_| Error::Config(format!("Invalid ID for {var}: '{val}'")))?;
            Ok(Some(T::from(id)))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_keys_and_fills_defaults() {
        let config =
            Config::from_json(r#"{ "prefix": "!", "sync_commands_globally": true }"#).unwrap();

        assert_eq!(config.prefix, "!");
        assert!(config.sync_commands_globally);
        assert!(config.owners.is_empty());
        assert_eq!(config.guild_id, None);
        assert_eq!(config.statuses, vec!["In Beta v0.1.0".to_string()]);
        assert_eq!(config.database_path, PathBuf::from("database/database.db"));
        assert_eq!(config.schema_path, PathBuf::from("database/schema.sql"));
        assert_eq!(config.bot_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn parses_optional_keys() {
        let config = Config::from_json(
            r#"{
                "prefix": "?",
                "sync_commands_globally": false,
                "owners": [1, 2],
                "guild_id": 42,
                "statuses": ["a", "b"]
            }"#,
        )
        .unwrap();

        assert_eq!(config.guild_id, Some(GuildId::new(42)));
        assert_eq!(config.statuses, vec!["a".to_string(), "b".to_string()]);
        let owners = config.owner_ids();
        assert!(owners.contains(&UserId::new(1)));
        assert!(owners.contains(&UserId::new(2)));
    }

    #[test]
    fn missing_required_key_is_a_config_error() {
        let err = Config::from_json(r#"{ "prefix": "!" }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let path = std::env::temp_dir().join("bot-template-missing-config.json");
        let err = Config::load(&path).unwrap_err();

        match err {
            Error::ConfigNotFound(p) => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "bot-template-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "prefix": "$", "sync_commands_globally": false }"#).unwrap();

        let config = Config::load(&path);
        std::fs::remove_file(&path).ok();

        let config = config.unwrap();
        assert_eq!(config.prefix, "$");
        assert!(!config.sync_commands_globally);
    }
}
