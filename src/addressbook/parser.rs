//! # Command Grammar
//!
//! Splits an input line into a [`RawCommand`] (keyword + argument text) and
//! extracts typed fields from the argument text for each command shape.
//!
//! The shapes are declared as anchored regular expressions with named groups:
//!
//! ```text
//! line     := KEYWORD ARGUMENTS
//! index    := TOKEN                      (must parse as an integer)
//! keywords := WORD (WS WORD)*
//! person   := NAME " " [p]p/PHONE " " [p]e/EMAIL " " [p]a/ADDRESS (" t/" TAG)*
//! ```
//!
//! `/` is reserved as the prefix delimiter, so no value may contain it. A `p`
//! directly before a field prefix marks that field private.
//!
//! Every mismatch is reported as [`AddressBookError::MalformedCommand`]. Domain
//! validation of the extracted values happens later, in the model constructors.

use crate::error::{AddressBookError, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeSet;

static BASIC_COMMAND_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<keyword>\S+)(?P<arguments>.*)$").unwrap());

static INDEX_ARGS_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<target_index>.+)$").unwrap());

static INTEGER_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

static KEYWORDS_ARGS_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<keywords>\S+(?:\s+\S+)*)$").unwrap());

static PERSON_DATA_ARGS_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<name>[^/]+)",
        r" (?P<phone_private>p?)p/(?P<phone>[^/]+)",
        r" (?P<email_private>p?)e/(?P<email>[^/]+)",
        r" (?P<address_private>p?)a/(?P<address>[^/]+)",
        r"(?P<tags>(?: t/[^/]+)*)$",
    ))
    .unwrap()
});

const PRIVATE_MARKER: &str = "p";
const TAG_PREFIX: &str = " t/";

/// An input line split into its keyword and the untouched remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand {
    pub keyword: String,
    pub arguments: String,
}

/// Raw person fields as typed by the user, before domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonData {
    pub name: String,
    pub phone: String,
    pub is_phone_private: bool,
    pub email: String,
    pub is_email_private: bool,
    pub address: String,
    pub is_address_private: bool,
    pub tags: BTreeSet<String>,
}

/// Splits a line into keyword and arguments. Fails on blank input.
pub fn parse(line: &str) -> Result<RawCommand> {
    let caps = BASIC_COMMAND_FORMAT
        .captures(line.trim())
        .ok_or(AddressBookError::MalformedCommand)?;
    Ok(RawCommand {
        keyword: group(&caps, "keyword").to_string(),
        arguments: group(&caps, "arguments").to_string(),
    })
}

impl RawCommand {
    /// Reads the arguments as a single display index.
    ///
    /// Only the token shape is checked here; range checks against the last
    /// shown list happen at execution time, so `0` and negatives parse fine.
    /// Integers too large for `i64` saturate and fail that range check.
    pub fn index_arg(&self) -> Result<i64> {
        let caps = INDEX_ARGS_FORMAT
            .captures(self.arguments.trim())
            .ok_or(AddressBookError::MalformedCommand)?;
        let token = group(&caps, "target_index");
        if !INTEGER_TOKEN.is_match(token) {
            return Err(AddressBookError::MalformedCommand);
        }
        Ok(token.parse().unwrap_or(if token.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }))
    }

    pub fn keywords_arg(&self) -> Result<Vec<String>> {
        let caps = KEYWORDS_ARGS_FORMAT
            .captures(self.arguments.trim())
            .ok_or(AddressBookError::MalformedCommand)?;
        Ok(group(&caps, "keywords")
            .split_whitespace()
            .map(str::to_string)
            .collect())
    }

    pub fn person_data_arg(&self) -> Result<PersonData> {
        let caps = PERSON_DATA_ARGS_FORMAT
            .captures(self.arguments.trim())
            .ok_or(AddressBookError::MalformedCommand)?;

        Ok(PersonData {
            name: group(&caps, "name").to_string(),
            phone: group(&caps, "phone").to_string(),
            is_phone_private: group(&caps, "phone_private") == PRIVATE_MARKER,
            email: group(&caps, "email").to_string(),
            is_email_private: group(&caps, "email_private") == PRIVATE_MARKER,
            address: group(&caps, "address").to_string(),
            is_address_private: group(&caps, "address_private") == PRIVATE_MARKER,
            tags: split_tags(group(&caps, "tags")),
        })
    }
}

fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// Splits `" t/a t/b"` into `{a, b}`; repeated tags collapse.
fn split_tags(tag_arguments: &str) -> BTreeSet<String> {
    match tag_arguments.strip_prefix(TAG_PREFIX) {
        Some(rest) => rest.split(TAG_PREFIX).map(str::to_string).collect(),
        None => BTreeSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(arguments: &str) -> RawCommand {
        RawCommand {
            keyword: "test".to_string(),
            arguments: arguments.to_string(),
        }
    }

    #[test]
    fn splits_keyword_and_arguments() {
        let cmd = parse("  find alice  bob ").unwrap();
        assert_eq!(cmd.keyword, "find");
        assert_eq!(cmd.arguments, " alice  bob");

        let bare = parse("list").unwrap();
        assert_eq!(bare.keyword, "list");
        assert_eq!(bare.arguments, "");
    }

    #[test]
    fn blank_line_is_malformed() {
        assert!(matches!(parse(""), Err(AddressBookError::MalformedCommand)));
        assert!(matches!(
            parse("   \t "),
            Err(AddressBookError::MalformedCommand)
        ));
    }

    #[test]
    fn index_requires_a_single_integer() {
        assert_eq!(raw(" 3 ").index_arg().unwrap(), 3);
        assert_eq!(raw("0").index_arg().unwrap(), 0);
        assert_eq!(raw("-2").index_arg().unwrap(), -2);
        for bad in ["", "   ", "abc", "1 2", "1a", "+", "1.5", "١"] {
            assert!(
                matches!(raw(bad).index_arg(), Err(AddressBookError::MalformedCommand)),
                "expected {:?} to be malformed",
                bad
            );
        }
    }

    #[test]
    fn oversized_index_saturates_instead_of_failing() {
        assert_eq!(raw("99999999999999999999").index_arg().unwrap(), i64::MAX);
        assert_eq!(raw("+99999999999999999999").index_arg().unwrap(), i64::MAX);
        assert_eq!(raw("-99999999999999999999").index_arg().unwrap(), i64::MIN);
        assert_eq!(raw("+7").index_arg().unwrap(), 7);
    }

    #[test]
    fn keywords_split_on_whitespace_runs() {
        assert_eq!(
            raw(" alice \t bob  ").keywords_arg().unwrap(),
            vec!["alice", "bob"]
        );
        assert!(matches!(
            raw("   ").keywords_arg(),
            Err(AddressBookError::MalformedCommand)
        ));
    }

    #[test]
    fn person_data_with_privacy_markers_and_tags() {
        let data = raw(" John Doe pp/98765432 e/john@x.com pa/311, Clementi Ave 2 t/friends t/work t/friends")
            .person_data_arg()
            .unwrap();
        assert_eq!(data.name, "John Doe");
        assert_eq!(data.phone, "98765432");
        assert!(data.is_phone_private);
        assert_eq!(data.email, "john@x.com");
        assert!(!data.is_email_private);
        assert_eq!(data.address, "311, Clementi Ave 2");
        assert!(data.is_address_private);
        assert_eq!(
            data.tags.into_iter().collect::<Vec<_>>(),
            vec!["friends", "work"]
        );
    }

    #[test]
    fn person_data_without_tags_has_empty_set() {
        let data = raw("Jane p/1 e/j@x a/Street").person_data_arg().unwrap();
        assert!(data.tags.is_empty());
        assert!(!data.is_phone_private);
    }

    #[test]
    fn person_data_shape_errors() {
        for bad in [
            "",
            "John p/123 e/j@x.com",
            "John p/123 a/Street e/j@x.com",
            "John p/123 e/j@x.com Clementi",
            "John p/123 e/j@x.com a/Street t/",
            "John p/123 e/j@x.com a/Street/5",
            "John xp/123 e/j@x.com a/Street",
        ] {
            assert!(
                matches!(
                    raw(bad).person_data_arg(),
                    Err(AddressBookError::MalformedCommand)
                ),
                "expected {:?} to be malformed",
                bad
            );
        }
    }
}
