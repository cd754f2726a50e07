//! # CLI Layer
//!
//! The interactive text UI. This is the only place that reads stdin, writes
//! stdout/stderr, or decides when the process ends.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: storage file, mirrors and verbosity via clap
//! 2. **Context Setup**: config, logging, and a `Logic` wired to its sinks
//! 3. **Command Loop**: feed each input line to `Logic::execute`
//! 4. **Output Formatting**: print result messages and numbered lists

mod args;
mod print;

use addressbook::commands::{build_command, Command};
use addressbook::config::AppConfig;
use addressbook::error::{AddressBookError, Result};
use addressbook::logic::Logic;
use addressbook::store::fs::JsonFileStore;
use args::Cli;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "ADDRESSBOOK_HOME";
const COMMENT_MARKER: char = '#';

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut logic = init_logic(&cli)?;
    print::print_welcome(&logic.storage_identifier());

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print::print_prompt();
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(AddressBookError::Io)?;
        if should_ignore(&line) {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                print::print_result(&result);
                if result.is_exit {
                    break;
                }
            }
            Err(e) => {
                print::print_error(&e);
                if build_command(&line) == Command::Exit {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("addressbook={}", level))),
        )
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "addressbook", "addressbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AddressBookError::Storage("Could not determine data directory".into()))
}

fn init_logic(cli: &Cli) -> Result<Logic> {
    let data_dir = data_dir()?;
    let config = AppConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        AppConfig::default()
    });

    let primary = cli
        .file
        .clone()
        .unwrap_or_else(|| config.storage_file_in(&data_dir));
    let mut logic = Logic::new(Box::new(JsonFileStore::new(primary)?))?;

    for mirror in config.mirror_files.iter().chain(&cli.mirrors) {
        logic.add_storage(Box::new(JsonFileStore::new(mirror.clone())?));
    }

    Ok(logic)
}

/// Blank lines and `#` comments never reach the engine.
fn should_ignore(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_blank_and_comment_lines() {
        assert!(should_ignore(""));
        assert!(should_ignore("   "));
        assert!(should_ignore("# a note"));
        assert!(should_ignore("  #list"));
        assert!(!should_ignore("list"));
    }
}
