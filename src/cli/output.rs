use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::domain::ColorToken;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
    Separator,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// Drop colors and labels; used for scripted runs.
    pub plain: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    colored::control::set_override(!prefs.plain);
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info | MessageKind::Section | MessageKind::Separator => "",
        MessageKind::Success => "[ok]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Hint => "hint:",
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Separator => "-".repeat(40),
        MessageKind::Info => text,
        _ => format!("{} {}", label(kind), text),
    };
    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Hint => base.bright_cyan().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info | MessageKind::Separator => base,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        MessageKind::Error => eprintln!("{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn separator() {
    print(MessageKind::Separator, "");
}

/// Colored block standing in for a legend or card color.
pub fn swatch(color: &ColorToken) -> String {
    match color.rgb() {
        Some((r, g, b)) => "■".truecolor(r, g, b).to_string(),
        None => "■".to_string(),
    }
}

const PLAIN_WIDTH: usize = 80;

/// Width available for bars, from the terminal when there is one. Plain
/// output always uses a fixed width.
pub fn terminal_width() -> usize {
    if preferences().plain {
        return PLAIN_WIDTH;
    }
    crossterm::terminal::size()
        .map(|(cols, _)| cols as usize)
        .unwrap_or(PLAIN_WIDTH)
        .clamp(40, 120)
}
