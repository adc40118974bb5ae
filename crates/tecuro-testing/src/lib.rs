//! Testing infrastructure for tecuro integration tests.
//!
//! - `TestWorld`: a scratch data directory plus a configured CLI command
//! - `assertions`: checks over the CLI's JSON output
//! - `fixtures`: sample catalog, suits and glossary

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
