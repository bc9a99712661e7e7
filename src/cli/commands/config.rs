use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::Command;
use crate::config::{Config, SETTING_KEYS};

pub(crate) fn definitions() -> Vec<Command> {
    vec![Command::new(
        "config",
        "View and change preferences",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn setting_value(config: &Config, key: &str) -> String {
    match key {
        "locale" => config.locale.clone(),
        "currency_symbol" => config.currency_symbol.clone(),
        "display_year" => config.display_year.to_string(),
        "initial_month" => config.initial_month.month().to_string(),
        "initial_account" => config.initial_account.to_string(),
        "chart_radius" => config.chart.radius.to_string(),
        "chart_stroke" => config.chart.stroke_width.to_string(),
        "dataset_path" => config
            .dataset_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "builtin".into()),
        _ => String::new(),
    }
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        output_section("Configuration");
        for key in SETTING_KEYS {
            io::print_info(format!("  {:<16} {}", key, setting_value(&context.config, key)));
        }
        io::print_info(format!("  file: {}", context.config_manager.path().display()));
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    SETTING_KEYS.join("|")
                )));
            }
            let key = args[1];
            let value = args[2..].join(" ");
            set_value(context, key, value.trim())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{}`",
            other
        ))),
    }
}

fn set_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.apply_setting(key, value)?;

    if key == "dataset_path" && updated.dataset_path != context.config.dataset_path {
        let previous = std::mem::replace(&mut context.config, updated);
        if let Err(err) = context.reload_dataset() {
            context.config = previous;
            return Err(err);
        }
    } else {
        context.config = updated;
    }

    context.persist_config()?;
    tracing::info!(key, value, "setting updated");
    io::print_success(format!("{} = {}", key, setting_value(&context.config, key)));
    Ok(())
}
