use super::error::{Error, Result};
use super::items::{GeometryType, Position, Ring};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ORDINATE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,]+").expect("separator pattern is valid"));
static RING_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\),?\s*\(").expect("ring separator pattern is valid"));

/// Coordinate tree of a single geometry, nested as GeoJSON expects per type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Coordinates {
    Position(Position),
    Line(Vec<Position>),
    Polygon(Vec<Ring>),
}

fn parse_ordinate(token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::NumericParse {
            token: token.to_string(),
        })
}

fn parse_ordinates(body: &str) -> Result<Vec<f64>> {
    ORDINATE_SEPARATOR
        .split(body.trim())
        .filter(|token| !token.is_empty())
        .map(parse_ordinate)
        .collect()
}

/// Format a raw body into the coordinate tree of `geometry_type`.
///
/// With `reverse` the flat ordinate list is reversed before it is grouped into
/// pairs, so a point `1 2` becomes `[2, 1]`. An odd number of ordinates leaves
/// a single-value position at the end.
///
/// # Example
///
/// ```
/// use geosparql_to_geojson::format::{format, Coordinates};
/// use geosparql_to_geojson::items::GeometryType;
///
/// let coordinates = format("1.23 2.34 3.45 4.56 5.67", GeometryType::Polygon, true).unwrap();
/// let expected = vec![vec![vec![5.67, 4.56], vec![3.45, 2.34], vec![1.23]]];
/// assert_eq!(coordinates, Coordinates::Polygon(expected));
/// ```
pub fn format(body: &str, geometry_type: GeometryType, reverse: bool) -> Result<Coordinates> {
    if geometry_type == GeometryType::Point {
        let mut ordinates = parse_ordinates(body)?;
        if reverse {
            ordinates.reverse();
        }
        return Ok(Coordinates::Position(ordinates));
    }

    let positions = parse_positions(body, reverse)?;
    let coordinates = match geometry_type {
        GeometryType::LineString => Coordinates::Line(positions),
        _ => Coordinates::Polygon(vec![positions]),
    };
    Ok(coordinates)
}

/// Ordinates of `body` grouped into pairs, reversed as a flat list first when
/// `reverse` is set.
fn parse_positions(body: &str, reverse: bool) -> Result<Vec<Position>> {
    let mut ordinates = parse_ordinates(body)?;
    if reverse {
        ordinates.reverse();
    }
    Ok(ordinates.chunks(2).map(|pair| pair.to_vec()).collect())
}

/// Split a polygon body into rings of positions.
///
/// Each ring is paired up like a [`format`] body, so a ring with an odd number
/// of ordinates ends in a single-value position. With `reverse` and paired
/// ordinates every vertex is swapped and the vertex order is reversed, which
/// leaves the ring orientation unchanged.
pub fn parse_rings(body: &str, reverse: bool) -> Result<Vec<Ring>> {
    RING_SEPARATOR
        .split(body)
        .map(|ring| parse_positions(ring, reverse))
        .collect()
}
