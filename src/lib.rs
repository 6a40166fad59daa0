pub mod cli;
pub mod error;
pub mod launch;
pub mod queue;
pub mod start;
