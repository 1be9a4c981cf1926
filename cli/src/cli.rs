//! CLI argument parsing with clap derive.
//!
//! `parse` returns a tagged result instead of exiting, so the driver alone
//! decides when and how the process terminates. It performs no filesystem
//! access; the on-disk existence check for the playbook directory happens
//! in the driver, before staging.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use crate::error::Error;

/// Usage line printed to stderr on any argument failure.
pub const USAGE: &str = "usage: playpen -d <playbook_dir> [-b] [-c]";

/// Stage a playbook and drive its two-node test harness
#[derive(Parser, Debug)]
#[command(
    name = "playpen",
    version,
    override_usage = "playpen -d <playbook_dir> [-b] [-c]"
)]
struct Cli {
    /// Playbook directory to stage (repeated values: the last one wins)
    #[arg(short = 'd', value_name = "playbook_dir", num_args = 1.., required = true)]
    dir: Vec<PathBuf>,

    /// Rebuild the harness images before bring-up
    #[arg(short = 'b')]
    rebuild: bool,

    /// Restage the playbook and restart without rebuilding images
    #[arg(short = 'c')]
    copy_only: bool,
}

/// Resolved run parameters. Constructed once per invocation, immutable
/// thereafter. `rebuild` takes priority over `copy_only` in dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub playbook_dir: PathBuf,
    pub rebuild: bool,
    pub copy_only: bool,
}

/// Outcome of a successful argument scan.
pub enum Parsed {
    /// Normal run with a validated configuration.
    Run(Config),
    /// `--help` or `--version`: the rendered message, exits zero.
    Exit(clap::Error),
}

/// Validate an argument vector (without the program name).
///
/// The greedy `-d` capture stops at the next recognized flag; a stray
/// non-flag token after `-b` or `-c` is rejected because the surface has
/// no positional arguments.
///
/// # Errors
///
/// `Error::MissingDirectory` when no `-d` was supplied at all;
/// `Error::BadArgument` for every other malformed usage (unknown flag,
/// stray token, `-d` without a value).
pub fn parse<I, T>(args: I) -> Result<Parsed, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv = std::iter::once(OsString::from("playpen"))
        .chain(args.into_iter().map(Into::into));
    match Cli::try_parse_from(argv) {
        Ok(cli) => Ok(Parsed::Run(cli.into_config())),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(Parsed::Exit(e)),
            ErrorKind::MissingRequiredArgument => Err(Error::MissingDirectory(
                "no playbook directory supplied".into(),
            )),
            _ => Err(Error::BadArgument(first_line(&e))),
        },
    }
}

impl Cli {
    fn into_config(mut self) -> Config {
        // required = true guarantees at least one captured value.
        let playbook_dir = self.dir.pop().unwrap_or_default();
        Config {
            playbook_dir,
            rebuild: self.rebuild,
            copy_only: self.copy_only,
        }
    }
}

/// Reduce a rendered clap error to its one-line reason.
fn first_line(e: &clap::Error) -> String {
    e.to_string()
        .lines()
        .next()
        .unwrap_or("invalid arguments")
        .trim_start_matches("error: ")
        .to_string()
}
