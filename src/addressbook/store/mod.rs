//! # Storage Layer
//!
//! The [`Storage`] trait is the durability contract the engine saves to after
//! every command. A sink persists and restores the *whole* address book; it
//! knows nothing about commands or display lists.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production sink, one JSON document per file
//! - [`memory::InMemoryStore`]: keeps the last saved snapshot in memory, for tests
//!
//! The engine may hold several sinks. They are independent: a failure in one
//! does not undo what earlier sinks already wrote.

use crate::error::Result;
use crate::model::AddressBook;

pub mod fs;
pub mod memory;

pub trait Storage {
    /// Persist the full address book, replacing whatever was stored before.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Restore the last saved address book.
    fn load(&self) -> Result<AddressBook>;

    /// Human-readable location of this sink, e.g. its file path.
    fn identifier(&self) -> String;
}
