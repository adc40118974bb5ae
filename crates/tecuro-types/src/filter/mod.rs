pub mod sort;
pub mod state;

pub use sort::*;
pub use state::*;
