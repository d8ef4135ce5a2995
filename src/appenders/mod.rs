//! Appender implementations

pub mod file;
pub mod memory;

#[cfg(feature = "console")]
pub mod console;

pub use file::FileAppender;
pub use memory::MemoryAppender;

#[cfg(feature = "console")]
pub use console::ConsoleAppender;

pub use crate::core::Appender;
