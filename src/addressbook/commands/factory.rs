//! Builds a [`Command`] from a raw input line.
//!
//! [`build_command`] is total: grammar mismatches become an
//! [`Command::Incorrect`] carrying the invalid-format message, and field
//! validation failures become one carrying the validation message verbatim.
//! Unknown keywords (and blank input) fall back to [`Command::Help`].

use crate::commands::{add, clear, delete, exit, find, help, list, view, Command};
use crate::error::{AddressBookError, Result};
use crate::model::{Address, Email, Name, Person, Phone, Tag};
use crate::parser::{self, PersonData, RawCommand};
use std::collections::BTreeSet;

pub fn build_command(line: &str) -> Command {
    match prepare(line) {
        Ok(command) => command,
        Err(AddressBookError::IllegalValue(message)) => Command::Incorrect { message },
        Err(_) => Command::Incorrect {
            message: invalid_format_message(),
        },
    }
}

pub fn invalid_format_message() -> String {
    format!("Invalid command format! \n{}", help::USAGE)
}

fn prepare(line: &str) -> Result<Command> {
    if line.trim().is_empty() {
        return Ok(Command::Help);
    }
    let raw = parser::parse(line)?;

    match raw.keyword.as_str() {
        add::COMMAND_WORD => prepare_add(&raw),
        delete::COMMAND_WORD => Ok(Command::Delete {
            index: raw.index_arg()?,
        }),
        clear::COMMAND_WORD => Ok(Command::Clear),
        find::COMMAND_WORD => prepare_find(&raw),
        list::COMMAND_WORD => Ok(Command::List),
        view::COMMAND_WORD => Ok(Command::View {
            index: raw.index_arg()?,
        }),
        view::VIEW_ALL_COMMAND_WORD => Ok(Command::ViewAll {
            index: raw.index_arg()?,
        }),
        exit::COMMAND_WORD => Ok(Command::Exit),
        help::COMMAND_WORD => Ok(Command::Help),
        _ => Ok(Command::Help),
    }
}

fn prepare_add(raw: &RawCommand) -> Result<Command> {
    let data = raw.person_data_arg()?;
    Ok(Command::Add(person_from_data(&data)?))
}

fn prepare_find(raw: &RawCommand) -> Result<Command> {
    let keywords: BTreeSet<String> = raw.keywords_arg()?.into_iter().collect();
    Ok(Command::Find { keywords })
}

fn person_from_data(data: &PersonData) -> Result<Person> {
    let tags = data
        .tags
        .iter()
        .map(|t| Tag::new(t))
        .collect::<Result<BTreeSet<Tag>>>()?;

    Ok(Person::new(
        Name::new(&data.name)?,
        Phone::new(&data.phone, data.is_phone_private)?,
        Email::new(&data.email, data.is_email_private)?,
        Address::new(&data.address, data.is_address_private)?,
        tags,
    ))
}
