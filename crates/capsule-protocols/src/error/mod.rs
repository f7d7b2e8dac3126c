//! Error types for the Capsule protocol layer.

mod browser;
mod classifier;
mod history;
mod protocol;

pub use browser::*;
pub use classifier::*;
pub use history::*;
pub use protocol::*;
