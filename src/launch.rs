use std::path::PathBuf;
use std::process::Command;

use log::*;

use crate::error::ChainError;

/// Ability to start a fresh instance of the chain launcher.
///
/// Implementations must not keep anything that would let the caller wait on,
/// signal or reap the new process: the child is on its own from the moment
/// `launch` returns.
pub trait Launcher {
    /// Start a new node with `args` as its duration queue, return its pid.
    fn launch(&self, args: &[String]) -> Result<u32, ChainError>;
}

/// Launches the executable of the current process.
#[derive(Debug, Clone)]
pub struct SelfLauncher {
    pub exe: PathBuf,
}

impl SelfLauncher {
    pub fn current() -> Result<Self, ChainError> {
        let exe = std::env::current_exe().map_err(ChainError::SelfExe)?;
        Ok(SelfLauncher { exe })
    }
}

impl Launcher for SelfLauncher {
    fn launch(&self, args: &[String]) -> Result<u32, ChainError> {
        let child = Command::new(&self.exe)
            .args(args)
            .spawn()
            .map_err(|source| ChainError::Spawn {
                exe: self.exe.clone(),
                source,
            })?;
        let pid = child.id();
        debug!(target: "launch", "Spawned {:?} {:?} as {}", self.exe, args, pid);

        // Dropping a `std::process::Child` neither waits nor kills.
        drop(child);
        Ok(pid)
    }
}
