#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod fs;
pub mod ops;

pub use error::*;

use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use std::ffi::OsString;

/// Installs the `env_logger` backend. `RUST_LOG` overrides the default
/// `warn` filter.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Entry point of `update-flatpak-manifest`.
pub fn run_manifest<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match parse::<cli::ManifestCli, _, _>(args)? {
        Some(cli) => command::manifest::execute(cli),
        None => Ok(()),
    }
}

/// Entry point of `update-flatpak-release`.
pub fn run_release<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match parse::<cli::ReleaseCli, _, _>(args)? {
        Some(cli) => command::release::execute(cli),
        None => Ok(()),
    }
}

/// Prints `err` to stdout the way CI logs expect it.
pub fn report(err: &BumpError) {
    match err {
        BumpError::Usage(usage) => println!("{}", usage),
        other if other.is_malformed_input() => {
            println!("{} {}", "Error: invalid input:".red().bold(), other)
        }
        other => println!("{} {}", "Error:".red().bold(), other),
    }
}

/// Parses arguments, printing help/version to stdout.
///
/// Returns `Ok(None)` when help or version was shown, and
/// [`BumpError::Usage`] for any other parse failure so the caller exits
/// with status 1 instead of clap's 2.
fn parse<P, I, T>(args: I) -> Result<Option<P>>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match P::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", e);
            Ok(None)
        }
        Err(e) => Err(BumpError::Usage(e.render().to_string())),
    }
}
