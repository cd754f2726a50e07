use crate::commands::{persons_listed_overview, CommandResult};
use crate::model::{AddressBook, Person};
use std::collections::BTreeSet;

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find: Finds all persons whose names contain any of the specified \
keywords and displays them as a list with index numbers.\n\
\tParameters: KEYWORD [MORE_KEYWORDS]...\n\
\tExample: find alice bob charlie";

pub fn run(book: &AddressBook, keywords: &BTreeSet<String>) -> CommandResult {
    let keywords: BTreeSet<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let found: Vec<Person> = book
        .persons()
        .iter()
        .filter(|p| {
            p.name
                .words()
                .any(|word| keywords.contains(&word.to_lowercase()))
        })
        .cloned()
        .collect();

    CommandResult::new(persons_listed_overview(found.len())).with_relevant_persons(found)
}
