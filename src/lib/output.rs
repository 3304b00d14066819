use super::geojson::Entity;
use serde_json::{to_string, to_string_pretty};
use std::error::Error;
use std::io::Write;

pub trait Output {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
    fn write_geojson_pretty(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
}

impl Output for Entity {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let string = to_string(self)?;
        writeln!(writer, "{}", string)?;
        Ok(())
    }

    fn write_geojson_pretty(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let string = to_string_pretty(self)?;
        writeln!(writer, "{}", string)?;
        Ok(())
    }
}
