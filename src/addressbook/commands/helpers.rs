use crate::error::{AddressBookError, Result};
use crate::model::Person;

/// Resolves a 1-based display index against the last shown list.
pub fn resolve_index(last_shown: &[Person], index: i64) -> Result<&Person> {
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| last_shown.get(i))
        .ok_or(AddressBookError::InvalidIndex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::person;

    #[test]
    fn accepts_exactly_one_to_len() {
        let shown = vec![person("Alice"), person("Bob"), person("Carol")];
        assert_eq!(resolve_index(&shown, 1).unwrap(), &shown[0]);
        assert_eq!(resolve_index(&shown, 3).unwrap(), &shown[2]);
        for bad in [0, -1, 4, i64::MIN, i64::MAX] {
            assert!(matches!(
                resolve_index(&shown, bad),
                Err(AddressBookError::InvalidIndex)
            ));
        }
    }

    #[test]
    fn empty_list_rejects_everything() {
        assert!(matches!(
            resolve_index(&[], 1),
            Err(AddressBookError::InvalidIndex)
        ));
    }
}
