use std::path::Path;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::Command;
use crate::core::services::{ChartService, DataService, ScreenService};
use crate::utils::paths::write_atomic;

pub(crate) fn definitions() -> Vec<Command> {
    vec![
        Command::new(
            "svg",
            "Write the donut chart of the selected month as SVG",
            "svg <path>",
            cmd_svg,
        ),
        Command::new(
            "export-data",
            "Write the active dataset to a JSON file",
            "export-data <path>",
            cmd_export_data,
        ),
    ]
}

fn path_arg<'a>(args: &[&'a str], usage: &str) -> Result<&'a Path, CommandError> {
    args.first()
        .map(|raw| Path::new(*raw))
        .ok_or_else(|| CommandError::InvalidArguments(format!("usage: {}", usage)))
}

fn cmd_svg(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = path_arg(args, "svg <path>")?;
    // the payments screen has no chart; fall back to the home selection
    let state = context.app.dashboard().unwrap_or(&context.app.home);
    let geometry = context.config.chart;
    let view = ScreenService::home(&context.dataset, state.account, state.period, &geometry);
    if view.chart.is_empty() {
        io::print_warning(format!(
            "No spend in {}; the chart is empty.",
            state.period.label(context.config.display_year)
        ));
    }
    let svg = ChartService::render_svg(&view.chart, &geometry);
    write_atomic(path, &svg)?;
    tracing::info!(path = %path.display(), segments = view.chart.segments().len(), "chart written");
    io::print_success(format!("Chart written to {}", path.display()));
    Ok(())
}

fn cmd_export_data(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = path_arg(args, "export-data <path>")?;
    DataService::export(&context.dataset, path)?;
    io::print_success(format!("Dataset exported to {}", path.display()));
    io::print_hint("Load it with `config set dataset_path <path>`.");
    Ok(())
}
