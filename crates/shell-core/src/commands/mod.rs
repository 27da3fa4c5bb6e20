//! Command implementations.

pub mod fs_commands;
pub mod help;
pub mod system;

pub use fs_commands::{CD, CHMOD, CP, HEAD, LS, RMDIR};
pub use help::HELP;
pub use system::{DATE, EXIT};
