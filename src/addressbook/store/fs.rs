use super::Storage;
use crate::error::{AddressBookError, Result};
use crate::model::{Address, AddressBook, Email, Name, Person, Phone, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const REQUIRED_EXTENSION: &str = "json";

/// Stores the address book as a pretty-printed JSON document.
///
/// A missing file loads as an empty book. Stored values go back through the
/// model constructors on load, so a hand-edited file with bad data is reported
/// instead of silently accepted.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.extension().and_then(|e| e.to_str()) != Some(REQUIRED_EXTENSION) {
            return Err(AddressBookError::InvalidStoragePath(format!(
                "Storage file should end with '.{}'",
                REQUIRED_EXTENSION
            )));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupted(&self, cause: AddressBookError) -> AddressBookError {
        AddressBookError::Storage(format!(
            "{} data is corrupted: {}",
            self.path.display(),
            cause
        ))
    }
}

impl Storage for JsonFileStore {
    fn save(&mut self, book: &AddressBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AddressBookError::Io)?;
            }
        }

        let stored = StoredAddressBook::from(book);
        let content = serde_json::to_string_pretty(&stored).map_err(AddressBookError::Serialization)?;

        let tmp_file = self.path.with_extension("json.tmp");
        fs::write(&tmp_file, content).map_err(AddressBookError::Io)?;
        fs::rename(&tmp_file, &self.path).map_err(AddressBookError::Io)?;

        debug!(path = %self.path.display(), persons = book.len(), "saved address book");
        Ok(())
    }

    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no storage file yet, starting empty");
            return Ok(AddressBook::new());
        }

        let content = fs::read_to_string(&self.path).map_err(AddressBookError::Io)?;
        let stored: StoredAddressBook = serde_json::from_str(&content)
            .map_err(|e| self.corrupted(AddressBookError::Serialization(e)))?;
        stored.into_address_book().map_err(|e| self.corrupted(e))
    }

    fn identifier(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredAddressBook {
    #[serde(default)]
    persons: Vec<StoredPerson>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPerson {
    name: String,
    phone: StoredDetail,
    email: StoredDetail,
    address: StoredDetail,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredDetail {
    value: String,
    #[serde(default)]
    is_private: bool,
}

impl StoredDetail {
    fn new(value: &str, is_private: bool) -> Self {
        Self {
            value: value.to_string(),
            is_private,
        }
    }
}

impl From<&AddressBook> for StoredAddressBook {
    fn from(book: &AddressBook) -> Self {
        let persons = book
            .persons()
            .iter()
            .map(|p| StoredPerson {
                name: p.name.as_str().to_string(),
                phone: StoredDetail::new(p.phone.value(), p.phone.is_private()),
                email: StoredDetail::new(p.email.value(), p.email.is_private()),
                address: StoredDetail::new(p.address.value(), p.address.is_private()),
                tags: p.tags.iter().map(|t| t.as_str().to_string()).collect(),
            })
            .collect();
        Self { persons }
    }
}

impl StoredAddressBook {
    fn into_address_book(self) -> Result<AddressBook> {
        let persons = self
            .persons
            .into_iter()
            .map(StoredPerson::into_person)
            .collect::<Result<Vec<_>>>()?;
        AddressBook::from_persons(persons)
    }
}

impl StoredPerson {
    fn into_person(self) -> Result<Person> {
        let tags = self
            .tags
            .iter()
            .map(|t| Tag::new(t))
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Person::new(
            Name::new(&self.name)?,
            Phone::new(&self.phone.value, self.phone.is_private)?,
            Email::new(&self.email.value, self.email.is_private)?,
            Address::new(&self.address.value, self.address.is_private)?,
            tags,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_json_paths() {
        let err = JsonFileStore::new("data/addressbook.txt").unwrap_err();
        assert_eq!(err.to_string(), "Storage file should end with '.json'");
        assert!(err.is_storage_failure());
        assert!(JsonFileStore::new("data/addressbook").is_err());
        assert!(JsonFileStore::new("data/addressbook.json").is_ok());
    }

    #[test]
    fn identifier_is_the_path() {
        let store = JsonFileStore::new("some/dir/book.json").unwrap();
        assert_eq!(
            store.identifier(),
            PathBuf::from("some/dir/book.json").display().to_string()
        );
    }
}
