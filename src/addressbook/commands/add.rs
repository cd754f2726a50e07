use crate::commands::CommandResult;
use crate::error::Result;
use crate::model::{AddressBook, Person};

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add: Adds a person to the address book. \
Contact details can be marked private by prepending 'p' to the prefix.\n\
\tParameters: NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS  [t/TAG]...\n\
\tExample: add John Doe p/98765432 e/johnd@gmail.com a/311, Clementi Ave 2, #02-25 t/friends t/owesMoney";

pub fn run(book: &mut AddressBook, person: &Person) -> Result<CommandResult> {
    book.add(person.clone())?;
    Ok(CommandResult::new(format!("New person added: {}", person)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::person;

    #[test]
    fn adds_person() {
        let mut book = AddressBook::new();
        let result = run(&mut book, &person("Alice")).unwrap();
        assert_eq!(book.len(), 1);
        assert!(result.message.starts_with("New person added: Alice"));
        assert!(result.relevant_persons.is_none());
    }

    #[test]
    fn rejects_duplicate() {
        let mut book = AddressBook::new();
        run(&mut book, &person("Alice")).unwrap();
        let err = run(&mut book, &person("Alice")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "This person already exists in the address book"
        );
        assert_eq!(book.len(), 1);
    }
}
