//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use reqwest::Url;

/// Endpoint used when `--endpoint` is not given.
pub const DEFAULT_ENDPOINT: &str = "https://vernanbackend.ezlab.in/api/contact-us/";

#[derive(Parser, Debug)]
#[command(
    name = "contact-form",
    version,
    about = "Fill in and submit a contact form from the terminal"
)]
pub struct Cli {
    /// URL the form is posted to
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: Url,

    /// Log file path (default: contact-form.log in the user data directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
