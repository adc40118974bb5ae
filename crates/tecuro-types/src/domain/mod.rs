pub mod catalog;
pub mod ingredient;
pub mod lenient;
pub mod suit;

pub use catalog::*;
pub use ingredient::*;
pub use suit::*;
