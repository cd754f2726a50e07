use crate::commands::CommandResult;
use crate::model::AddressBook;

pub const COMMAND_WORD: &str = "clear";

pub const USAGE: &str = "clear: Clears address book permanently.\n\tExample: clear";

pub fn run(book: &mut AddressBook) -> CommandResult {
    book.clear();
    CommandResult::new("Address book has been cleared!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::book_with;

    #[test]
    fn clearing_twice_is_fine() {
        let mut book = book_with(&["Alice", "Bob"]);
        run(&mut book);
        assert!(book.is_empty());
        let again = run(&mut book);
        assert!(book.is_empty());
        assert_eq!(again.message, "Address book has been cleared!");
    }
}
