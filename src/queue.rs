use std::time::Duration;

use log::*;

/// Sleep increment for a node that never exits on its own.
pub const FOREVER_TICK: Duration = Duration::from_secs(1);

/// The durations left for this node and its descendants.
///
/// Only the head, in milliseconds, belongs to the current node. The tail is
/// handed over verbatim to the next one, which parses it itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationQueue {
    head: i64,
    tail: Vec<String>,
}

impl DurationQueue {
    pub fn new(head: i64, tail: Vec<String>) -> Self {
        DurationQueue { head, tail }
    }

    pub fn head(&self) -> i64 {
        self.head
    }

    /// The command line of the next level, empty at the end of the chain.
    pub fn tail(&self) -> &[String] {
        &self.tail
    }

    /// Number of chain levels from this node down, this node included.
    pub fn depth(&self) -> usize {
        1 + self.tail.len()
    }
}

/// What a node does once its child (if any) has been launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPolicy {
    /// Exit right away.
    Exit,
    /// Sleep, then exit.
    Sleep(Duration),
    /// Never exit; only an external signal ends the process.
    Forever,
}

impl WaitPolicy {
    pub fn from_millis(millis: i64) -> Self {
        match millis {
            0 => WaitPolicy::Exit,
            m if m > 0 => WaitPolicy::Sleep(Duration::from_millis(m as u64)),
            _ => WaitPolicy::Forever,
        }
    }

    /// Block the calling thread according to the policy.
    ///
    /// Returns for `Exit` and `Sleep`. For `Forever`, loops on
    /// `FOREVER_TICK` sleeps so that the process stays responsive to signals.
    pub fn apply(self) {
        match self {
            WaitPolicy::Exit => {}
            WaitPolicy::Sleep(duration) => std::thread::sleep(duration),
            WaitPolicy::Forever => {
                debug!(target: "queue", "Sleeping until killed");
                loop {
                    std::thread::sleep(FOREVER_TICK);
                }
            }
        }
    }
}
