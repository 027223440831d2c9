//! Extension loading.
//!
//! Extensions are listed at compile time in [`crate::cogs::registry`]. Each one
//! is set up independently: a failing extension is logged and skipped, and the
//! rest keep loading. Entries load in registry declaration order.

use crate::config::Config;
use crate::error::Error;
use crate::Command;
use std::collections::HashSet;
use tracing::{error, info};

pub type Setup = fn(&Config) -> Result<Vec<Command>, Error>;

/// A named, independently loadable group of commands.
#[derive(Clone, Copy)]
pub struct Extension {
    pub name: &'static str,
    setup: Setup,
}

impl Extension {
    pub const fn new(name: &'static str, setup: Setup) -> Self {
        Self { name, setup }
    }
}

impl std::fmt::Debug for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extension").field("name", &self.name).finish()
    }
}

/// Outcome of [`load_all`].
#[derive(Default)]
pub struct LoadReport {
    pub commands: Vec<Command>,
    pub loaded: Vec<&'static str>,
    pub failed: Vec<(&'static str, String)>,
}

pub fn load_all(extensions: impl IntoIterator<Item = Extension>, config: &Config) -> LoadReport {
    let mut report = LoadReport::default();
    let mut registered: HashSet<Trigger> = HashSet::new();

    for extension in extensions {
        match load_one(&extension, config, &report.loaded, &registered) {
            Ok(commands) => {
                registered.extend(commands.iter().flat_map(triggers));
                info!(
                    extension = extension.name,
                    commands = commands.len(),
                    "Loaded extension '{}'",
                    extension.name
                );
                report.commands.extend(commands);
                report.loaded.push(extension.name);
            }
            Err(e) => {
                let diagnostic = format!("{}: {}", e.kind(), e);
                error!(
                    extension = extension.name,
                    error = %diagnostic,
                    "Failed to load extension {}",
                    extension.name
                );
                report.failed.push((extension.name, diagnostic));
            }
        }
    }

    report
}

fn load_one(
    extension: &Extension,
    config: &Config,
    loaded: &[&'static str],
    registered: &HashSet<Trigger>,
) -> Result<Vec<Command>, Error> {
    if loaded.contains(&extension.name) {
        return Err(Error::Extension(format!(
            "Extension '{}' is already loaded",
            extension.name
        )));
    }

    let commands = (extension.setup)(config)?;

    let mut seen = HashSet::new();
    for trigger in commands.iter().flat_map(triggers) {
        if registered.contains(&trigger) || !seen.insert(trigger.clone()) {
            return Err(Error::Extension(format!("{trigger} is already registered")));
        }
    }

    Ok(commands)
}

/// Anything a user can type or click to invoke a command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Trigger {
    /// Command name or prefix alias.
    Name(String),
    ContextMenu(String),
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trigger::Name(name) => write!(f, "Command '{name}'"),
            Trigger::ContextMenu(name) => write!(f, "Context menu entry '{name}'"),
        }
    }
}

fn triggers(command: &Command) -> Vec<Trigger> {
    std::iter::once(&command.name)
        .chain(&command.aliases)
        .cloned()
        .map(Trigger::Name)
        .chain(command.context_menu_name.clone().map(Trigger::ContextMenu))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cogs::general;

    fn config() -> Config {
        Config::from_json(r#"{ "prefix": "!", "sync_commands_globally": false }"#).unwrap()
    }

    fn ping_only(_: &Config) -> Result<Vec<Command>, Error> {
        Ok(vec![general::ping()])
    }

    fn help_only(_: &Config) -> Result<Vec<Command>, Error> {
        Ok(vec![general::help()])
    }

    fn broken(_: &Config) -> Result<Vec<Command>, Error> {
        Err(Error::Config("missing key 'api_key'".into()))
    }

    fn nothing(_: &Config) -> Result<Vec<Command>, Error> {
        Ok(Vec::new())
    }

    fn info_aliased_as_ping(_: &Config) -> Result<Vec<Command>, Error> {
        let mut command = general::botinfo();
        command.aliases = vec!["ping".to_string()];
        Ok(vec![command])
    }

    fn report_menu(_: &Config) -> Result<Vec<Command>, Error> {
        let mut command = general::botinfo();
        command.context_menu_name = Some("Report".to_string());
        Ok(vec![command])
    }

    fn another_report_menu(_: &Config) -> Result<Vec<Command>, Error> {
        let mut command = general::serverinfo();
        command.context_menu_name = Some("Report".to_string());
        Ok(vec![command])
    }

    #[test]
    fn failures_are_isolated() {
        let registry = [
            Extension::new("first_broken", broken),
            Extension::new("ping", ping_only),
            Extension::new("second_broken", broken),
            Extension::new("help", help_only),
            Extension::new("empty", nothing),
        ];

        let report = load_all(registry, &config());

        assert_eq!(report.loaded, vec!["ping", "help", "empty"]);
        assert_eq!(report.commands.len(), 2);
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.failed[0].0, "first_broken");
        assert_eq!(
            report.failed[0].1,
            "ConfigError: missing key 'api_key'"
        );
        assert_eq!(report.failed[1].0, "second_broken");
    }

    #[test]
    fn duplicate_extension_name_fails() {
        let registry = [
            Extension::new("ping", ping_only),
            Extension::new("ping", help_only),
        ];

        let report = load_all(registry, &config());

        assert_eq!(report.loaded, vec!["ping"]);
        assert_eq!(report.commands.len(), 1);
        assert_eq!(report.commands[0].name, "ping");
        assert!(report.failed[0].1.starts_with("ExtensionError:"));
    }

    #[test]
    fn command_name_collision_fails_the_later_extension() {
        let registry = [
            Extension::new("a", ping_only),
            Extension::new("b", ping_only),
        ];

        let report = load_all(registry, &config());

        assert_eq!(report.loaded, vec!["a"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "b");
        assert!(report.failed[0].1.contains("'ping'"));
    }

    #[test]
    fn alias_collision_fails_the_later_extension() {
        let registry = [
            Extension::new("general", ping_only),
            Extension::new("info", info_aliased_as_ping),
        ];

        let report = load_all(registry, &config());

        assert_eq!(report.loaded, vec!["general"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "info");
        assert_eq!(
            report.failed[0].1,
            "ExtensionError: Command 'ping' is already registered"
        );
    }

    #[test]
    fn context_menu_collision_fails_the_later_extension() {
        let registry = [
            Extension::new("reports", report_menu),
            Extension::new("more_reports", another_report_menu),
        ];

        let report = load_all(registry, &config());

        assert_eq!(report.loaded, vec!["reports"]);
        assert_eq!(report.failed[0].0, "more_reports");
        assert_eq!(
            report.failed[0].1,
            "ExtensionError: Context menu entry 'Report' is already registered"
        );
    }

    #[test]
    fn bundled_registry_loads_cleanly() {
        let report = load_all(crate::cogs::registry(), &config());

        assert!(report.failed.is_empty(), "{:?}", report.failed);
        assert_eq!(report.loaded, vec!["general", "moderation", "owner"]);
    }
}
