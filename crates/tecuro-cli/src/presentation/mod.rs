mod palette;
mod renderer;
pub mod view_models;
mod views;

pub use palette::Palette;
pub use renderer::ConsoleRenderer;
pub use view_models::{CommandResultViewModel, CreateView};
