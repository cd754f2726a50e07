use crate::commands::CommandResult;
use crate::error::Result;
use crate::model::{AddressBook, Person};

use super::helpers::resolve_index;

pub const COMMAND_WORD: &str = "delete";

pub const USAGE: &str = "delete: Deletes the person identified by the index number used in the last person listing.\n\
\tParameters: INDEX\n\
\tExample: delete 1";

pub fn run(book: &mut AddressBook, last_shown: &[Person], index: i64) -> Result<CommandResult> {
    let target = resolve_index(last_shown, index)?;
    let removed = book.remove(target)?;
    Ok(CommandResult::new(format!("Deleted Person: {}", removed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressBookError;
    use crate::store::memory::fixtures::{book_with, person};

    #[test]
    fn removes_only_the_indexed_person() {
        let mut book = book_with(&["Alice", "Bob", "Carol"]);
        let shown = book.persons().to_vec();

        let result = run(&mut book, &shown, 2).unwrap();
        assert!(result.message.starts_with("Deleted Person: Bob"));
        let names: Vec<_> = book.persons().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn out_of_range_leaves_book_untouched() {
        let mut book = book_with(&["Alice"]);
        let shown = book.persons().to_vec();
        for bad in [0, -1, 2] {
            assert!(matches!(
                run(&mut book, &shown, bad),
                Err(AddressBookError::InvalidIndex)
            ));
        }
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn stale_reference_when_person_already_gone() {
        let mut book = book_with(&["Alice"]);
        let shown = vec![person("Alice"), person("Ghost")];
        assert!(matches!(
            run(&mut book, &shown, 2),
            Err(AddressBookError::StaleReference)
        ));
    }
}
