use super::Storage;
use crate::error::Result;
use crate::model::AddressBook;

/// In-memory sink for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    book: AddressBook,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `load` returns the given book.
    pub fn with_book(book: AddressBook) -> Self {
        Self {
            book,
            save_count: 0,
        }
    }

    pub fn saved(&self) -> &AddressBook {
        &self.book
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Storage for InMemoryStore {
    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.book = book.clone();
        self.save_count += 1;
        Ok(())
    }

    fn load(&self) -> Result<AddressBook> {
        Ok(self.book.clone())
    }

    fn identifier(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Address, AddressBook, Email, Name, Person, Phone};

    /// A valid public person; distinct names give distinct persons.
    pub fn person(name: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new("91234567", false).unwrap(),
            Email::new("someone@example.com", false).unwrap(),
            Address::new("1 Example Road", false).unwrap(),
            Default::default(),
        )
    }

    pub fn book_with(names: &[&str]) -> AddressBook {
        AddressBook::from_persons(names.iter().map(|n| person(n)).collect()).unwrap()
    }
}
