pub mod config;
pub mod data;
pub mod screens;
pub mod selection;
pub mod system;

use crate::cli::registry::{CommandGroup, CommandRegistry};

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandGroup::Screens, screens::definitions());
    registry.register(CommandGroup::Selection, selection::definitions());
    registry.register(CommandGroup::Data, data::definitions());
    registry.register(CommandGroup::Settings, config::definitions());
    registry.register(CommandGroup::System, system::definitions());
}
