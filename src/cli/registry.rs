//! Shell command table. Commands are registered per group so `help` can
//! list them under the screen or concern they belong to.

use std::collections::HashMap;

use crate::cli::core::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Screens,
    Selection,
    Data,
    Settings,
    System,
}

impl CommandGroup {
    pub fn title(self) -> &'static str {
        match self {
            CommandGroup::Screens => "Screens",
            CommandGroup::Selection => "Account and month",
            CommandGroup::Data => "Data",
            CommandGroup::Settings => "Settings",
            CommandGroup::System => "System",
        }
    }
}

pub struct Command {
    pub name: &'static str,
    pub summary: &'static str,
    pub usage: &'static str,
    pub run: CommandHandler,
}

impl Command {
    pub const fn new(
        name: &'static str,
        summary: &'static str,
        usage: &'static str,
        run: CommandHandler,
    ) -> Self {
        Self {
            name,
            summary,
            usage,
            run,
        }
    }
}

#[derive(Default)]
pub struct CommandRegistry {
    groups: Vec<(CommandGroup, Vec<Command>)>,
    // name -> (group slot, command slot)
    index: HashMap<&'static str, (usize, usize)>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group of commands. A name that is already taken keeps its
    /// first registration.
    pub fn register(&mut self, group: CommandGroup, commands: Vec<Command>) {
        let slot = match self.groups.iter().position(|(existing, _)| *existing == group) {
            Some(slot) => slot,
            None => {
                self.groups.push((group, Vec::new()));
                self.groups.len() - 1
            }
        };
        for command in commands {
            if self.index.contains_key(command.name) {
                tracing::warn!(command = command.name, "duplicate command ignored");
                continue;
            }
            let members = &mut self.groups[slot].1;
            self.index.insert(command.name, (slot, members.len()));
            members.push(command);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.index
            .get(name)
            .map(|&(group, position)| &self.groups[group].1[position])
    }

    pub fn group_of(&self, name: &str) -> Option<CommandGroup> {
        self.index.get(name).map(|&(group, _)| self.groups[group].0)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|command| command.run)
    }

    /// Names in help order: by group, then by registration.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.groups
            .iter()
            .flat_map(|(_, commands)| commands.iter().map(|command| command.name))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// `help` with no argument: one heading per group, one line per command.
    pub fn overview_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (group, commands) in &self.groups {
            if commands.is_empty() {
                continue;
            }
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!("{}:", group.title()));
            for command in commands {
                lines.push(format!("  {:<12} {}", command.name, command.summary));
            }
        }
        lines.push(String::new());
        lines.push("Use `help <command>` for details.".to_string());
        lines
    }

    /// `help <command>`; `None` when the name is unknown.
    pub fn detail_lines(&self, name: &str) -> Option<Vec<String>> {
        let command = self.get(name)?;
        let group = self.group_of(name)?;
        Some(vec![
            format!("  {} ({})", command.summary, group.title()),
            format!("  Usage: {}", command.usage),
        ])
    }
}
