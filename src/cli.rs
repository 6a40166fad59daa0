use std::ffi::{OsStr, OsString};
use std::path::Path;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::error::ChainError;
use crate::queue::DurationQueue;

const HEAD: &str = "sleep_duration";
const TAIL: &str = "additional_args";

/// File name of `argv[0]`, or the package name if there is none.
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|argv0| Path::new(argv0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

pub fn app() -> Command {
    Command::new("reaper-ptree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run a chain of processes, one per duration, each lingering for its own duration")
        .arg(
            Arg::new(HEAD)
                .help("Milliseconds this process lingers: 0 exits at once, a negative value never exits")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new(TAIL)
                .help("Durations of the next levels, handed over to the child as they are")
                .num_args(1..)
                .action(ArgAction::Append)
                .allow_hyphen_values(true),
        )
}

/// Parse a full command line (program name included) into a duration queue.
///
/// Only the head is parsed here. The tail is kept as given, so that a bad
/// value further down the chain only fails the node that receives it.
pub fn parse_from<I, T>(args: I) -> Result<DurationQueue, ChainError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let matches = app().try_get_matches_from(args.clone())?;
    let head = match matches.get_one::<i64>(HEAD) {
        Some(head) => *head,
        None => {
            return Err(ChainError::Usage {
                program: program_name(args.first().map(OsString::as_os_str)),
            })
        }
    };
    let tail: Vec<String> = matches
        .get_many::<String>(TAIL)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    Ok(DurationQueue::new(head, tail))
}
