use log::*;

use crate::error::ChainError;
use crate::launch::Launcher;
use crate::queue::{DurationQueue, WaitPolicy};

pub struct StartArgs {
    pub queue: DurationQueue,
}

/// Run one node of the chain.
///
/// Launch the next node with the tail of `args.queue` (if any), without
/// waiting for it, then apply the wait policy of the head. The launch always
/// happens first, so that descendants exist before this node may exit.
///
/// Returns once the wait policy is over. A negative head never returns.
pub fn start<L: Launcher>(args: &StartArgs, launcher: &L) -> Result<(), ChainError> {
    let queue = &args.queue;
    debug!(target: "start", "Node {} at depth {}, head {}ms",
        std::process::id(),
        queue.depth(),
        queue.head());

    if !queue.tail().is_empty() {
        let child = launcher.launch(queue.tail())?;
        debug!(target: "start", "Launched child {} with {} remaining levels",
            child,
            queue.tail().len());
    }

    let policy = WaitPolicy::from_millis(queue.head());
    debug!(target: "start", "Applying {:?}", policy);
    policy.apply();

    debug!(target: "start", "Done");
    Ok(())
}
