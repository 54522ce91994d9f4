//! CLI command implementations

pub mod cache;
pub mod command;
pub mod completions;
pub mod config;
pub mod path;
pub mod platform;

pub use cache::execute as cache;
pub use command::{build, watch};
pub use completions::execute as completions;
pub use config::execute as config;
pub use path::{install, path};
pub use platform::execute as platform;
