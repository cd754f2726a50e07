use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addressbook", bin_name = "addressbook", version)]
#[command(about = "Command-line address book", long_about = None)]
pub struct Cli {
    /// Primary storage file (must end with .json)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Additional file to mirror the address book to (repeatable)
    #[arg(short, long = "mirror", value_name = "PATH")]
    pub mirrors: Vec<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
