use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::Command;
use crate::domain::{AccountSelector, Displayable, Period};
use crate::view::{DashboardState, ViewEvent};

pub(crate) fn definitions() -> Vec<Command> {
    vec![
        Command::new(
            "account",
            "Select the account shown on this screen",
            "account [combined|mastercard|visa]",
            cmd_account,
        ),
        Command::new("next", "Show the next month", "next", cmd_next),
        Command::new("prev", "Show the previous month", "prev", cmd_prev),
        Command::new("month", "Jump to a month", "month <1-12>", cmd_month),
    ]
}

fn dashboard(context: &mut ShellContext) -> Result<&mut DashboardState, CommandError> {
    context.app.dashboard_mut().ok_or_else(|| {
        CommandError::InvalidArguments(
            "account and month apply to the home and analytics screens".into(),
        )
    })
}

/// Applies `event` to the active dashboard and redraws it.
fn apply(context: &mut ShellContext, event: ViewEvent) -> CommandResult {
    let changed = dashboard(context)?.apply(event);
    tracing::debug!(?event, changed, "dashboard event");
    context.render_current();
    Ok(())
}

fn cmd_account(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(raw) = args.first() {
        let account: AccountSelector = raw.parse()?;
        return apply(context, ViewEvent::SelectAccount(account));
    }

    let current = dashboard(context)?.account;
    if context.mode == CliMode::Script {
        // no picker without a terminal: show the open dropdown instead
        return apply(context, ViewEvent::ToggleDropdown);
    }

    let labels: Vec<String> = AccountSelector::ALL
        .iter()
        .map(|account| account.display_label())
        .collect();
    let default = AccountSelector::ALL
        .iter()
        .position(|account| *account == current)
        .unwrap_or(0);
    match io::select_item(&context.theme, "Счёт", &labels, default)? {
        Some(index) => apply(context, ViewEvent::SelectAccount(AccountSelector::ALL[index])),
        None => {
            io::print_info("Selection cancelled.");
            Ok(())
        }
    }
}

fn cmd_next(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    apply(context, ViewEvent::NextMonth)
}

fn cmd_prev(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    apply(context, ViewEvent::PreviousMonth)
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("usage: month <1-12>".into()))?;
    let month: u32 = raw
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("`{}` is not a month number", raw)))?;
    let period = Period::new(month)?;
    apply(context, ViewEvent::JumpTo(period))
}
