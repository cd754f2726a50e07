//! # Execution Engine
//!
//! [`Logic`] owns the address book, the last shown list and the storage sinks.
//! Each call to [`Logic::execute`] runs one input line through the pipeline:
//!
//! ```text
//! line ─▶ build_command ─▶ Command::execute(book, last_shown) ─▶ save to every sink ─▶ record result
//! ```
//!
//! Building and executing never fail; bad input and unresolvable indexes end
//! up in the result message. Only a sink failure is returned as an error. In
//! that case the in-memory change has already happened, sinks before the
//! failing one keep what they wrote, and the last shown list is not updated.

use crate::commands::{build_command, Command, CommandResult};
use crate::error::Result;
use crate::model::{AddressBook, Person};
use crate::store::Storage;
use tracing::{debug, info, warn};

pub struct Logic {
    book: AddressBook,
    last_shown: Vec<Person>,
    sinks: Vec<Box<dyn Storage>>,
}

impl Logic {
    /// Creates the engine and seeds the address book from `storage`.
    pub fn new(storage: Box<dyn Storage>) -> Result<Self> {
        let book = storage.load()?;
        info!(
            sink = %storage.identifier(),
            persons = book.len(),
            "loaded address book"
        );
        Ok(Self::with_address_book(storage, book))
    }

    /// Creates the engine around an existing address book without loading.
    pub fn with_address_book(storage: Box<dyn Storage>, book: AddressBook) -> Self {
        Self {
            book,
            last_shown: Vec::new(),
            sinks: vec![storage],
        }
    }

    /// Registers another sink. It is saved to after all earlier ones.
    pub fn add_storage(&mut self, storage: Box<dyn Storage>) {
        debug!(sink = %storage.identifier(), "registered storage sink");
        self.sinks.push(storage);
    }

    /// Identifier of the primary sink (the one the book was loaded from).
    pub fn storage_identifier(&self) -> String {
        self.sinks
            .first()
            .map(|s| s.identifier())
            .unwrap_or_default()
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.book
    }

    pub fn last_shown_list(&self) -> &[Person] {
        &self.last_shown
    }

    /// Parses, executes and persists one line of user input.
    pub fn execute(&mut self, line: &str) -> Result<CommandResult> {
        let command = build_command(line);
        let result = self.execute_command(&command)?;
        self.record_result(&result);
        Ok(result)
    }

    fn execute_command(&mut self, command: &Command) -> Result<CommandResult> {
        debug!(?command, "executing");
        let result = command.execute(&mut self.book, &self.last_shown);

        for sink in self.sinks.iter_mut() {
            if let Err(e) = sink.save(&self.book) {
                warn!(sink = %sink.identifier(), error = %e, "failed to save address book");
                return Err(e);
            }
        }

        Ok(result)
    }

    fn record_result(&mut self, result: &CommandResult) {
        if let Some(persons) = &result.relevant_persons {
            self.last_shown = persons.clone();
        }
    }
}
