use log::*;

use reaper_ptree::cli;
use reaper_ptree::error::ChainError;
use reaper_ptree::launch::SelfLauncher;
use reaper_ptree::start::{self, StartArgs};

fn run() -> Result<(), ChainError> {
    let queue = cli::parse_from(std::env::args_os())?;
    let launcher = SelfLauncher::current()?;
    start::start(&StartArgs { queue }, &launcher)
}

fn main() {
    env_logger::init();
    match run() {
        Ok(()) => {}
        Err(ChainError::Parse(err)) => err.exit(),
        Err(err) => {
            debug!(target: "main", "Node {} failed: {:?}", std::process::id(), err);
            eprintln!("{}", err);
            std::process::exit(err.exit_code());
        }
    }
}
