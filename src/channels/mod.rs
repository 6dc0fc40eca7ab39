//! Channel abstraction for conversation I/O.

pub mod channel;
pub mod cli;

pub use channel::*;
pub use cli::CliChannel;
