//! Shared building blocks for the pattern exercises.
//!
//! Every skin (bridge, strategy, singleton) reports failures through
//! [`PatternError`], writes its demo output through a [`LineSink`] and sets
//! up logging with [`logger::setup_logger`].

pub mod error;
pub mod logger;
pub mod output;
pub mod time;

pub use error::PatternError;
pub use output::{LineSink, MemorySink, StdoutSink};
