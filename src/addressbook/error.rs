use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressBookError {
    #[error("Invalid command format")]
    MalformedCommand,

    #[error("{0}")]
    IllegalValue(String),

    #[error("The person index provided is invalid")]
    InvalidIndex,

    #[error("Person could not be found in address book")]
    StaleReference,

    #[error("This person already exists in the address book")]
    DuplicatePerson,

    #[error("{0}")]
    InvalidStoragePath(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AddressBookError {
    /// True for failures raised by a storage sink rather than by a command.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            AddressBookError::InvalidStoragePath(_)
                | AddressBookError::Storage(_)
                | AddressBookError::Io(_)
                | AddressBookError::Serialization(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AddressBookError>;
