use std::collections::HashMap;

use crate::cli::context::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            aliases: &[],
            description,
            usage,
            handler,
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Command table with stable listing order and alias lookup.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    aliases: HashMap<&'static str, &'static str>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        for alias in entry.aliases {
            self.aliases.insert(alias, name);
        }
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        let canonical = self.aliases.get(name).copied().unwrap_or(name);
        self.commands.get(canonical)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied().chain(self.aliases.keys().copied())
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }

    /// Closest known command to a mistyped one, if any is near enough.
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        let needle = input.to_ascii_lowercase();
        self.names()
            .map(|name| (name, strsim::levenshtein(&needle, name)))
            .filter(|(_, distance)| *distance <= 2)
            .min_by_key(|(_, distance)| *distance)
            .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut ShellContext, _: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn aliases_resolve_to_their_command() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("breakdown", "d", "u", noop).with_aliases(&["chart"]));
        assert_eq!(registry.get("chart").map(|entry| entry.name), Some("breakdown"));
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn suggests_near_misses_only() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("balance", "d", "u", noop));
        registry.register(CommandEntry::new("list", "d", "u", noop));
        assert_eq!(registry.suggest("balanse"), Some("balance"));
        assert_eq!(registry.suggest("lst"), Some("list"));
        assert_eq!(registry.suggest("xyzzy"), None);
    }
}
