//! # Contact Model
//!
//! Value types for a person's details and the [`AddressBook`] that holds them.
//!
//! Every field type is constructed through a validating `new`, so a `Person`
//! that exists is always well-formed. Inputs are trimmed before validation.
//!
//! Phone, email and address carry a privacy flag. Private fields are hidden by
//! [`Person::as_text_hide_private`] and revealed by [`Person::as_text_show_all`].

use crate::error::{AddressBookError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;

pub const NAME_CONSTRAINTS: &str = "Person names should be spaces or alphanumeric characters";
pub const PHONE_CONSTRAINTS: &str = "Person phone numbers should only contain numbers";
pub const EMAIL_CONSTRAINTS: &str =
    "Person emails should be 2 alphanumeric/period strings separated by '@'";
pub const ADDRESS_CONSTRAINTS: &str = "Person addresses can be in any format";
pub const TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[[:alnum:] ]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.]+@[\w.]+$").unwrap());
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+$").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[[:alnum:]]+$").unwrap());

fn validated(raw: &str, re: &Regex, constraints: &str) -> Result<String> {
    let trimmed = raw.trim();
    if re.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(AddressBookError::IllegalValue(constraints.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self> {
        validated(raw, &NAME_RE, NAME_CONSTRAINTS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The whitespace-separated words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

/// Generates a contact detail type: a validated value plus a privacy flag.
macro_rules! contact_detail {
    ($ty:ident, $re:ident, $constraints:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty {
            value: String,
            is_private: bool,
        }

        impl $ty {
            pub fn new(raw: &str, is_private: bool) -> Result<Self> {
                let value = validated(raw, &$re, $constraints)?;
                Ok(Self { value, is_private })
            }

            pub fn value(&self) -> &str {
                &self.value
            }

            pub fn is_private(&self) -> bool {
                self.is_private
            }
        }
    };
}

contact_detail!(Phone, PHONE_RE, PHONE_CONSTRAINTS);
contact_detail!(Email, EMAIL_RE, EMAIL_CONSTRAINTS);
contact_detail!(Address, ADDRESS_RE, ADDRESS_CONSTRAINTS);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: &str) -> Result<Self> {
        validated(raw, &TAG_RE, TAG_CONSTRAINTS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    /// Identity used for duplicate detection and lookups.
    ///
    /// Compares field values only; privacy flags and tags are ignored.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
            && self.phone.value == other.phone.value
            && self.email.value == other.email.value
            && self.address.value == other.address.value
    }

    pub fn as_text_show_all(&self) -> String {
        let mut text = self.name.as_str().to_string();
        push_detail(&mut text, "Phone", &self.phone.value, self.phone.is_private);
        push_detail(&mut text, "Email", &self.email.value, self.email.is_private);
        push_detail(
            &mut text,
            "Address",
            &self.address.value,
            self.address.is_private,
        );
        push_tags(&mut text, &self.tags);
        text
    }

    pub fn as_text_hide_private(&self) -> String {
        let mut text = self.name.as_str().to_string();
        let details = [
            ("Phone", &self.phone.value, self.phone.is_private),
            ("Email", &self.email.value, self.email.is_private),
            ("Address", &self.address.value, self.address.is_private),
        ];
        for (label, value, is_private) in details {
            if !is_private {
                push_detail(&mut text, label, value, false);
            }
        }
        push_tags(&mut text, &self.tags);
        text
    }
}

fn push_detail(text: &mut String, label: &str, value: &str, is_private: bool) {
    text.push_str(&format!(" {}: ", label));
    if is_private {
        text.push_str("(private) ");
    }
    text.push_str(value);
}

fn push_tags(text: &mut String, tags: &BTreeSet<Tag>) {
    text.push_str(" Tags: ");
    for tag in tags {
        text.push_str(&tag.to_string());
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text_show_all())
    }
}

/// The authoritative contact collection. Keeps insertion order and never holds
/// two persons for which [`Person::is_same_person`] is true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from existing persons, rejecting duplicates.
    pub fn from_persons(persons: Vec<Person>) -> Result<Self> {
        let mut book = Self::new();
        for person in persons {
            book.add(person)?;
        }
        Ok(book)
    }

    pub fn add(&mut self, person: Person) -> Result<()> {
        if self.contains(&person) {
            return Err(AddressBookError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn remove(&mut self, person: &Person) -> Result<Person> {
        let pos = self
            .persons
            .iter()
            .position(|p| p.is_same_person(person))
            .ok_or(AddressBookError::StaleReference)?;
        Ok(self.persons.remove(pos))
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}
