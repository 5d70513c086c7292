use thiserror::Error;

use crate::app::FinanceManager;
use crate::cli::{commands, output, registry::CommandRegistry};
use crate::errors::{CliError, FinanceError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
    OneShot,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error(transparent)]
    Finance(#[from] FinanceError),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// State shared by every command handler for the life of the shell.
pub struct ShellContext {
    manager: FinanceManager,
    registry: CommandRegistry,
    mode: CliMode,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(manager: FinanceManager, mode: CliMode) -> Self {
        let mut registry = CommandRegistry::new();
        for entry in commands::definitions() {
            registry.register(entry);
        }
        Self {
            manager,
            registry,
            mode,
            running: true,
        }
    }

    pub fn manager(&self) -> &FinanceManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut FinanceManager {
        &mut self.manager
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        format!("fintrack [{}]> ", self.manager.home_currency())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            return Err(CommandError::UnknownCommand(raw.to_string()));
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    /// Prints a failed command and keeps the shell alive.
    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::UnknownCommand(name) => {
                output::warning(format!("Unknown command `{name}`."));
                match self.registry.suggest(&name) {
                    Some(suggestion) => output::hint(format!("Did you mean `{suggestion}`?")),
                    None => output::hint("Type `help` to list commands."),
                }
            }
            other => output::error(other),
        }
        Ok(())
    }
}
