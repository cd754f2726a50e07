use crate::commands::CommandResult;
use crate::error::{AddressBookError, Result};
use crate::model::{AddressBook, Person};

use super::helpers::resolve_index;

pub const COMMAND_WORD: &str = "view";
pub const VIEW_ALL_COMMAND_WORD: &str = "viewall";

pub const USAGE: &str = "view: Views the non-private details of the person identified \
by the index number in the last shown person listing.\n\
\tParameters: INDEX\n\
\tExample: view 1";

pub const VIEW_ALL_USAGE: &str = "viewall: Views all details of the person identified \
by the index number in the last shown person listing.\n\
\tParameters: INDEX\n\
\tExample: viewall 1";

/// Shows only the public details.
pub fn run(book: &AddressBook, last_shown: &[Person], index: i64) -> Result<CommandResult> {
    let target = resolve_existing(book, last_shown, index)?;
    Ok(viewing(target.as_text_hide_private()))
}

/// Shows every detail, private ones included.
pub fn run_all(book: &AddressBook, last_shown: &[Person], index: i64) -> Result<CommandResult> {
    let target = resolve_existing(book, last_shown, index)?;
    Ok(viewing(target.as_text_show_all()))
}

fn resolve_existing<'a>(
    book: &AddressBook,
    last_shown: &'a [Person],
    index: i64,
) -> Result<&'a Person> {
    let target = resolve_index(last_shown, index)?;
    if !book.contains(target) {
        return Err(AddressBookError::StaleReference);
    }
    Ok(target)
}

fn viewing(text: String) -> CommandResult {
    CommandResult::new(format!("Viewing person: {}", text))
}
