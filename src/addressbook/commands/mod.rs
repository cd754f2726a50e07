//! # Command Layer
//!
//! A [`Command`] is an immutable, fully validated operation built from one line
//! of user input by [`factory::build_command`]. Executing it needs only the
//! address book and the last shown list; commands never touch storage.
//!
//! Each variant's logic lives in its own module as a `run` function returning
//! `Result<CommandResult>`. [`Command::execute`] folds the domain errors those
//! functions raise (bad index, stale reference, duplicate) into the result
//! message, so execution itself never fails.

use crate::model::{AddressBook, Person};
use std::collections::BTreeSet;

pub mod add;
pub mod clear;
pub mod delete;
pub mod exit;
pub mod factory;
pub mod find;
pub mod helpers;
pub mod help;
pub mod list;
pub mod view;

pub use factory::build_command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Person),
    Delete { index: i64 },
    Clear,
    Find { keywords: BTreeSet<String> },
    List,
    View { index: i64 },
    ViewAll { index: i64 },
    Exit,
    Help,
    Incorrect { message: String },
}

impl Command {
    pub fn execute(&self, book: &mut AddressBook, last_shown: &[Person]) -> CommandResult {
        let outcome = match self {
            Command::Add(person) => add::run(book, person),
            Command::Delete { index } => delete::run(book, last_shown, *index),
            Command::Clear => Ok(clear::run(book)),
            Command::Find { keywords } => Ok(find::run(book, keywords)),
            Command::List => Ok(list::run(book)),
            Command::View { index } => view::run(book, last_shown, *index),
            Command::ViewAll { index } => view::run_all(book, last_shown, *index),
            Command::Exit => Ok(exit::run()),
            Command::Help => Ok(help::run()),
            Command::Incorrect { message } => Ok(CommandResult::new(message.clone())),
        };
        outcome.unwrap_or_else(|e| CommandResult::new(e.to_string()))
    }
}

/// Outcome of executing a command.
///
/// When `relevant_persons` is set it becomes the new last shown list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub message: String,
    pub relevant_persons: Option<Vec<Person>>,
    pub is_exit: bool,
}

impl CommandResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_relevant_persons(mut self, persons: Vec<Person>) -> Self {
        self.relevant_persons = Some(persons);
        self
    }

    pub fn exiting(mut self) -> Self {
        self.is_exit = true;
        self
    }
}

/// "N persons listed!" for list-producing commands.
pub fn persons_listed_overview(count: usize) -> String {
    format!("{} persons listed!", count)
}
