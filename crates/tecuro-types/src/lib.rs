pub mod domain;
pub mod filter;

pub use domain::*;
pub use filter::*;
