use geosparql_to_geojson::geojson::Properties;
use geosparql_to_geojson::output::Output;
use geosparql_to_geojson::Converter;
use serde_json::Value;
use std::error::Error;
use std::fs::read_to_string;
use std::io::{self, Read};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "geosparql2geojson")]
/// Convert GeoSPARQL geometry literals into a GeoJSON FeatureCollection
struct Opt {
    /// Input files, converted together in the given order. Reads stdin if omitted.
    #[structopt(parse(from_os_str))]
    inputs: Vec<PathBuf>,

    /// Reverse the ordinate order of every coordinate
    #[structopt(short, long)]
    reverse: bool,

    /// Property attached to every feature, e.g. `-p name=Somerset`
    #[structopt(short, long = "property", parse(try_from_str = parse_property))]
    properties: Vec<(String, Value)>,

    /// Indent the output
    #[structopt(long)]
    pretty: bool,
}

/// `key=value`, the value is read as JSON and falls back to a plain string.
fn parse_property(property_str: &str) -> Result<(String, Value), String> {
    let split_str: Vec<&str> = property_str.splitn(2, '=').collect();
    if split_str.len() < 2 || split_str[0].is_empty() {
        return Err(format!("expected key=value, got `{}`", property_str));
    }
    let key = split_str[0].to_string();
    let value = serde_json::from_str(split_str[1])
        .unwrap_or_else(|_| Value::String(split_str[1].to_string()));
    Ok((key, value))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opt = Opt::from_args();

    let fragments = if opt.inputs.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        vec![text]
    } else {
        opt.inputs
            .iter()
            .map(read_to_string)
            .collect::<Result<Vec<_>, _>>()?
    };

    let properties: Properties = opt.properties.into_iter().collect();
    let converter = Converter::new(properties).reverse(opt.reverse);
    let collection = converter.convert(&fragments)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if opt.pretty {
        collection.write_geojson_pretty(&mut handle)?;
    } else {
        collection.write_geojson(&mut handle)?;
    }
    Ok(())
}
