mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use types::{FeaturedKind, LogLevel, OutputFormat};
pub use commands::run;
