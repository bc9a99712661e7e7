//! Shell context, dispatch, and error reporting.

use std::io;

use dialoguer::theme::ColorfulTheme;
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    cli::{
        commands,
        io as cli_io,
        registry::CommandRegistry,
        render,
    },
    config::{Config, ConfigManager},
    core::services::{DataService, ScreenService, ServiceError},
    errors::SpendError,
    storage::{builtin, Dataset},
    view::{AppState, Screen},
};

pub const SCRIPT_ENV: &str = "SPENDSPHERE_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] SpendError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(err) => CommandError::Core(err),
            ServiceError::Invalid(message) => CommandError::InvalidArguments(message),
        }
    }
}

/// Errors that end the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] SpendError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub dataset: Dataset,
    pub app: AppState,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        Ok(Self::with_parts(mode, config_manager, config))
    }

    pub fn with_parts(mode: CliMode, config_manager: ConfigManager, config: Config) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let dataset = match DataService::open(&config) {
            Ok(dataset) => dataset,
            Err(err) => {
                tracing::warn!(error = %err, "falling back to built-in dataset");
                cli_io::print_warning(format!("{err}. Using built-in data."));
                builtin().clone()
            }
        };
        let app = AppState::new(config.initial_account, config.initial_month);

        Self {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            dataset,
            app,
            running: true,
        }
    }

    pub fn prompt(&self) -> String {
        let screen = match self.app.current {
            Screen::Home => "home",
            Screen::Analytics => "analytics",
            Screen::RegularPayments => "payments",
        };
        format!("spendsphere:{screen}> ")
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Exit shell?", true)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            other => cli_io::print_error(other.to_string()),
        }
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn reload_dataset(&mut self) -> CommandResult {
        self.dataset = DataService::open(&self.config)?;
        Ok(())
    }

    /// Re-runs the pipeline for the active screen and prints it.
    pub(crate) fn render_current(&self) {
        let lines = match self.app.current {
            Screen::Home => {
                let state = &self.app.home;
                let view = ScreenService::home(
                    &self.dataset,
                    state.account,
                    state.period,
                    &self.config.chart,
                );
                render::home(&view, state, &self.config)
            }
            Screen::Analytics => {
                let state = &self.app.analytics;
                let view = ScreenService::analytics(&self.dataset, state.account, state.period);
                render::analytics(&view, state, &self.config)
            }
            Screen::RegularPayments => {
                let view = ScreenService::payments(&self.dataset, self.app.payments.tab);
                render::payments(&view, &self.config)
            }
        };
        render::print_lines(&lines);
        if self.app.menu_open() {
            render::print_lines(&render::side_menu());
        }
    }
}
