#![allow(dead_code)]

use std::process::Stdio;
use std::time::{Duration, Instant};

pub const EXE: &str = env!("CARGO_BIN_EXE_reaper-ptree");

/// Snapshot of one entry of the Linux process table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcInfo {
    pub pid: i32,
    pub ppid: i32,
    pub pgrp: i32,
    pub state: char,
}

impl ProcInfo {
    pub fn is_alive(&self) -> bool {
        self.state != 'Z' && self.state != 'X'
    }
}

/// Read `/proc/<pid>/stat`. `None` if the process is gone.
pub fn proc_info(pid: i32) -> Option<ProcInfo> {
    let stat = std::fs::read_to_string(format!("/proc/{}/stat", pid)).ok()?;
    // `comm` may contain spaces and parentheses, skip past the last ')'.
    let rest = &stat[stat.rfind(')')? + 1..];
    let mut fields = rest.split_whitespace();
    let state = fields.next()?.chars().next()?;
    let ppid = fields.next()?.parse().ok()?;
    let pgrp = fields.next()?.parse().ok()?;
    Some(ProcInfo {
        pid,
        ppid,
        pgrp,
        state,
    })
}

/// Every entry of process group `pgrp`, zombies included.
pub fn group_entries(pgrp: i32) -> Vec<ProcInfo> {
    let entries = match std::fs::read_dir("/proc") {
        Ok(entries) => entries,
        Err(_) => return vec![],
    };
    entries
        .filter_map(|entry| entry.ok()?.file_name().to_str()?.parse::<i32>().ok())
        .filter_map(proc_info)
        .filter(|info| info.pgrp == pgrp)
        .collect()
}

/// Live (non-zombie) members of process group `pgrp`.
pub fn group_members(pgrp: i32) -> Vec<ProcInfo> {
    group_entries(pgrp)
        .into_iter()
        .filter(ProcInfo::is_alive)
        .collect()
}

/// Poll the process table until the group has exactly `expected` live members.
///
/// Returns the last snapshot, whether or not it matched.
pub async fn wait_for_members(pgrp: i32, expected: usize, timeout: Duration) -> Vec<ProcInfo> {
    let start = Instant::now();
    loop {
        let members = group_members(pgrp);
        if members.len() == expected || start.elapsed() >= timeout {
            return members;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Kills the whole chain on drop, including orphans.
pub struct ChainCleanup {
    pub pgrp: i32,
}
impl Drop for ChainCleanup {
    fn drop(&mut self) {
        unsafe {
            libc::kill(-self.pgrp, libc::SIGKILL);
        }
    }
}

/// Start a chain root in a process group of its own.
///
/// Every descendant inherits the group, so the chain can be observed and
/// torn down even after some of its members have been orphaned.
pub fn spawn_chain<D: ToString>(durations: &[D]) -> (tokio::process::Child, ChainCleanup) {
    let child = chain_command(durations)
        .env_remove("RUST_LOG")
        .spawn()
        .expect("Could not spawn chain root");
    let pgrp = child.id().expect("Chain root has no pid") as i32;
    (child, ChainCleanup { pgrp })
}

/// Command for a chain root in a process group of its own, stdout discarded.
pub fn chain_command<D: ToString>(durations: &[D]) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new(EXE);
    cmd.args(durations.iter().map(|d| d.to_string()))
        .process_group(0)
        .stdin(Stdio::null())
        .stdout(Stdio::null());
    cmd
}

/// Pids of the nodes that announced themselves in a `start=debug` log.
pub fn logged_nodes(stderr: &[u8]) -> Vec<(u32, usize)> {
    String::from_utf8_lossy(stderr)
        .lines()
        .filter_map(|line| {
            let rest = &line[line.find("Node ")? + "Node ".len()..];
            let (pid, rest) = rest.split_once(" at depth ")?;
            let depth = rest.split(',').next()?;
            Some((pid.parse().ok()?, depth.parse().ok()?))
        })
        .collect()
}
