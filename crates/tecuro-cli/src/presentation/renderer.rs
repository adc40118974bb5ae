use anyhow::Result;
use serde::Serialize;

use super::palette::Palette;
use super::view_models::{CommandResultViewModel, CreateView};
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    json_mode: bool,
    palette: Palette,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
            palette: Palette::detect(),
        }
    }

    pub fn render<T>(&self, content: T) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            let result = CommandResultViewModel::new(content);
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        print!("{}", content.create_view(self.palette));
        Ok(())
    }
}
