use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::Command;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<Command> {
    vec![
        Command::new("version", "Show build metadata", "version", cmd_version),
        Command::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        Command::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output_section(format!("SpendSphere {}", meta.version));
    io::print_info(format!(
        "  Build hash   : {} ({})",
        meta.git_hash, meta.git_status
    ));
    io::print_info(format!("  Built at     : {}", meta.timestamp));
    io::print_info(format!("  Target       : {}", meta.target));
    io::print_info(format!("  Profile      : {}", meta.profile));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(raw) = args.first() {
        let name = raw.to_lowercase();
        match context.registry.detail_lines(&name) {
            Some(lines) => {
                output_section(format!("Help: {name}"));
                lines.iter().for_each(io::print_info);
            }
            None => context.suggest_command(raw),
        }
        return Ok(());
    }

    output_section("Available commands");
    context.registry.overview_lines().iter().for_each(io::print_info);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
