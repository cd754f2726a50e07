use crate::commands::{add, clear, delete, exit, find, list, view, CommandResult};

pub const COMMAND_WORD: &str = "help";

pub const USAGE: &str = "help: Shows program usage instructions.\n\tExample: help";

/// Usage text for every command, one block per command.
pub fn all_usages() -> String {
    [
        add::USAGE,
        delete::USAGE,
        clear::USAGE,
        find::USAGE,
        list::USAGE,
        view::USAGE,
        view::VIEW_ALL_USAGE,
        USAGE,
        exit::USAGE,
    ]
    .join("\n")
}

pub fn run() -> CommandResult {
    CommandResult::new(all_usages())
}
