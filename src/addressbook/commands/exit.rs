use crate::commands::CommandResult;

pub const COMMAND_WORD: &str = "exit";

pub const USAGE: &str = "exit: Exits the program.\n\tExample: exit";

pub fn run() -> CommandResult {
    CommandResult::new("Exiting Address Book as requested ...").exiting()
}
