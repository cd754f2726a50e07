use addressbook::error::AddressBookError;
use addressbook::model::{Address, AddressBook, Email, Name, Person, Phone, Tag};
use addressbook::store::fs::JsonFileStore;
use addressbook::store::Storage;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, JsonFileStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested").join("book.json")).unwrap();
    (dir, store)
}

fn sample_book() -> AddressBook {
    let alice = Person::new(
        Name::new("Alice Tan").unwrap(),
        Phone::new("11111111", true).unwrap(),
        Email::new("alice@x.com", false).unwrap(),
        Address::new("1 Alice Street", true).unwrap(),
        [Tag::new("friend").unwrap(), Tag::new("work").unwrap()]
            .into_iter()
            .collect(),
    );
    let bob = Person::new(
        Name::new("Bob").unwrap(),
        Phone::new("22222222", false).unwrap(),
        Email::new("bob@x.com", true).unwrap(),
        Address::new("2 Bob Street", false).unwrap(),
        Default::default(),
    );
    AddressBook::from_persons(vec![alice, bob]).unwrap()
}

#[test]
fn missing_file_loads_empty() {
    let (_dir, store) = setup();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let (_dir, mut store) = setup();
    let book = sample_book();
    store.save(&book).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, book);
    assert!(loaded.persons()[0].phone.is_private());
    assert!(loaded.persons()[1].email.is_private());
}

#[test]
fn save_overwrites_and_leaves_no_temp_files() {
    let (_dir, mut store) = setup();
    store.save(&sample_book()).unwrap();
    store.save(&AddressBook::new()).unwrap();
    assert!(store.load().unwrap().is_empty());

    let parent = store.path().parent().unwrap();
    for entry in fs::read_dir(parent).unwrap() {
        let name = entry.unwrap().file_name().into_string().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn unparseable_file_is_a_storage_failure() {
    let (_dir, mut store) = setup();
    store.save(&AddressBook::new()).unwrap();
    fs::write(store.path(), "{ not json").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, AddressBookError::Storage(_)));
    assert!(err.is_storage_failure());
    let message = err.to_string();
    assert!(message.contains("data is corrupted"), "{}", message);
    assert!(message.contains("book.json"), "{}", message);
}

#[test]
fn illegal_stored_values_are_reported_as_corrupted() {
    let (_dir, mut store) = setup();
    store.save(&AddressBook::new()).unwrap();
    fs::write(
        store.path(),
        r#"{"persons": [{
            "name": "Eve",
            "phone": {"value": "not-a-number"},
            "email": {"value": "eve@x.com"},
            "address": {"value": "Somewhere"}
        }]}"#,
    )
    .unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, AddressBookError::Storage(_)));
    assert!(err.to_string().contains("data is corrupted"));
}
