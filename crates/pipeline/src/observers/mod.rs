//! Observer implementations for the admission pipeline.

pub mod console;
pub mod log;

pub use console::ConsoleNotifier;
pub use log::TracingNotifier;
