//! # Address Book Architecture
//!
//! A command-line contact manager built as a library with a thin text UI on top.
//! The library turns one line of user input into a typed command, runs it against
//! the in-memory address book, saves the result to every storage sink and hands
//! back a textual outcome.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads input lines, prints results, owns stdout/stderr    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (logic.rs)                                          │
//! │  - Owns the address book and the last shown list            │
//! │  - parse → execute → save to all sinks → record result      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (parser.rs, commands/)                            │
//! │  - Grammar, command factory, one module per command         │
//! │  - Pure: no I/O, no storage                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Storage trait                                            │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display Indexes
//!
//! Commands that list persons (`list`, `find`) produce a display list. `delete`,
//! `view` and `viewall` address persons by their 1-based position in the most
//! recent such list, never by position in the address book itself.
//!
//! ## Module Overview
//!
//! - [`logic`]: The execution engine
//! - [`commands`]: Command values, the factory, and per-command logic
//! - [`parser`]: Input grammar and field extraction
//! - [`model`]: `Person`, its validated fields, and `AddressBook`
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types
//! - `cli`: The interactive text UI for the binary (not part of the lib API)

pub mod commands;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod parser;
pub mod store;
