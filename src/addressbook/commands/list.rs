use crate::commands::{persons_listed_overview, CommandResult};
use crate::model::AddressBook;

pub const COMMAND_WORD: &str = "list";

pub const USAGE: &str =
    "list: Displays all persons in the address book as a list with index numbers.\n\tExample: list";

pub fn run(book: &AddressBook) -> CommandResult {
    let all = book.persons().to_vec();
    CommandResult::new(persons_listed_overview(all.len())).with_relevant_persons(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::book_with;

    #[test]
    fn lists_every_person_in_book_order() {
        let book = book_with(&["Alice", "Bob", "Carol"]);
        let result = run(&book);
        assert_eq!(result.message, "3 persons listed!");
        assert_eq!(result.relevant_persons.as_deref(), Some(book.persons()));
    }

    #[test]
    fn empty_book_yields_empty_list() {
        let result = run(&AddressBook::new());
        assert_eq!(result.relevant_persons, Some(vec![]));
    }
}
