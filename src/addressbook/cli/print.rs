use addressbook::commands::CommandResult;
use addressbook::error::AddressBookError;
use addressbook::model::Person;
use colored::Colorize;
use std::io::Write;

const DIVIDER: &str = "===================================================";

pub(super) fn print_welcome(storage: &str) {
    println!("{}", DIVIDER);
    println!("{}", "Welcome to your Address Book!".bold());
    println!("Using storage file : {}", storage);
    println!("{}", DIVIDER);
}

pub(super) fn print_prompt() {
    print!("{}", "Enter command: ".dimmed());
    let _ = std::io::stdout().flush();
}

pub(super) fn print_result(result: &CommandResult) {
    if let Some(persons) = &result.relevant_persons {
        print_persons(persons);
    }
    println!("{}", result.message);
    println!("{}", DIVIDER);
}

pub(super) fn print_error(error: &AddressBookError) {
    eprintln!("{}", error.to_string().red());
}

/// Numbered list using the public rendering; private details stay hidden.
fn print_persons(persons: &[Person]) {
    for (i, person) in persons.iter().enumerate() {
        println!(
            "{} {}",
            format!("{}.", i + 1).yellow(),
            person.as_text_hide_private()
        );
    }
}
