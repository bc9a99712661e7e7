use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::cli::core::CommandError;
use crate::cli::output;

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Arrow-key picker; `None` when the user backs out with Esc.
pub fn select_item<T: ToString>(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[T],
    default: usize,
) -> Result<Option<usize>, CommandError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact_opt()
        .map_err(CommandError::from)
}
