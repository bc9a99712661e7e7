use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::Command;
use crate::domain::PaymentGroup;
use crate::view::{MenuDestination, NavigationOutcome, PaymentsEvent};

pub(crate) fn definitions() -> Vec<Command> {
    vec![
        Command::new("home", "Open the home dashboard", "home", cmd_home),
        Command::new(
            "analytics",
            "Open the ranked category analytics",
            "analytics",
            cmd_analytics,
        ),
        Command::new(
            "payments",
            "Open regular payments, optionally on a tab",
            "payments [subscriptions|bills|debts]",
            cmd_payments,
        ),
        Command::new("menu", "Toggle the side menu", "menu", cmd_menu),
        Command::new(
            "go",
            "Follow a side-menu entry",
            "go <home|analytics|payments|forecast|groups|support>",
            cmd_go,
        ),
        Command::new("show", "Redraw the current screen", "show", cmd_show),
    ]
}

fn open(context: &mut ShellContext, destination: MenuDestination) -> CommandResult {
    match context.app.navigate(destination) {
        NavigationOutcome::Opened(_) => {
            context.render_current();
            Ok(())
        }
        NavigationOutcome::Unavailable(destination) => {
            io::print_warning(format!("`{}` is not available yet.", destination.title()));
            Ok(())
        }
    }
}

fn cmd_home(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    open(context, MenuDestination::Home)
}

fn cmd_analytics(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    open(context, MenuDestination::Analytics)
}

fn cmd_payments(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(raw) = args.first() {
        let group: PaymentGroup = raw.parse()?;
        context.app.payments.apply(PaymentsEvent::SelectTab(group));
    }
    open(context, MenuDestination::RegularPayments)
}

fn cmd_menu(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.app.toggle_menu();
    context.render_current();
    Ok(())
}

fn cmd_go(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: go <home|analytics|payments|forecast|groups|support>".into(),
        ));
    }
    let destination: MenuDestination = args.join(" ").parse()?;
    open(context, destination)
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.render_current();
    Ok(())
}
