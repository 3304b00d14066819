use super::error::{Error, Result};
use super::items::GeometryType;
use indexmap::IndexMap;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Raw coordinate bodies grouped by type, in the order each type was first seen.
pub type GeometryStore = IndexMap<GeometryType, Vec<String>>;

// Any word directly in front of the parentheses is captured, unknown ones are
// dropped in `populate` so their bodies never reach the store.
static GEOMETRY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z]+)?\(+(.*?)\)+").expect("geometry pattern is valid"));

/// One captured literal, the keyword is absent for bare parenthesized groups.
pub type Capture<'a> = (Option<&'a str>, &'a str);

pub fn scan(text: &str) -> Vec<Capture<'_>> {
    GEOMETRY_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let keyword = caps.get(1).map(|m| m.as_str());
            let body = caps.get(2)?.as_str();
            Some((keyword, body))
        })
        .collect()
}

/// Add the captures of one scan to the store.
///
/// A capture without keyword belongs to the literal right before it, which is
/// how polygon holes are written: `Polygon((outer),(hole))`. A capture with an
/// unknown keyword is skipped, and a bare group after it has nothing to inherit.
pub fn populate(store: &mut GeometryStore, captures: &[Capture]) -> Result<()> {
    let mut previous: Option<GeometryType> = None;
    for (keyword, body) in captures {
        let geometry_type = match keyword {
            Some(keyword) => match GeometryType::from_keyword(keyword) {
                Some(geometry_type) => geometry_type,
                None => {
                    trace!("skipping unknown keyword {}", keyword);
                    previous = None;
                    continue;
                }
            },
            None => previous.ok_or_else(|| Error::MalformedLiteral(body.to_string()))?,
        };
        trace!("captured {} body of {} bytes", geometry_type, body.len());
        store
            .entry(geometry_type)
            .or_insert_with(Vec::new)
            .push(body.to_string());
        previous = Some(geometry_type);
    }
    Ok(())
}

/// Scan every fragment on its own and merge the results into one store.
pub fn extract<S: AsRef<str>>(fragments: &[S]) -> Result<GeometryStore> {
    let mut store = GeometryStore::new();
    for fragment in fragments {
        let captures = scan(fragment.as_ref());
        populate(&mut store, &captures)?;
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_point() {
        let captures = scan(r#"<a> <b> "Point(1.23 9.87)"^^<wktLiteral> ."#);
        assert_eq!(captures, vec![(Some("Point"), "1.23 9.87")]);
    }

    #[test]
    fn scan_polygon_with_hole() {
        let captures = scan("POLYGON((0 0, 0 10, 10 10, 10 0, 0 0),(2 2, 4 2, 4 4, 2 2))");
        assert_eq!(
            captures,
            vec![
                (Some("POLYGON"), "0 0, 0 10, 10 10, 10 0, 0 0"),
                (None, "2 2, 4 2, 4 4, 2 2"),
            ]
        );
    }

    #[test]
    fn scan_prefers_longest_keyword() {
        let captures = scan("MultiPoint((1 2)) MultiLineString((3 4, 5 6))");
        assert_eq!(
            captures,
            vec![
                (Some("MultiPoint"), "1 2"),
                (Some("MultiLineString"), "3 4, 5 6"),
            ]
        );
    }

    #[test]
    fn populate_typed_entry() {
        let mut store = GeometryStore::new();
        populate(&mut store, &[(Some("Polygon"), "12.123")]).unwrap();
        assert_eq!(store[&GeometryType::Polygon], vec!["12.123"]);
    }

    #[test]
    fn populate_inherits_missing_keyword() {
        let mut store = GeometryStore::new();
        populate(&mut store, &[(Some("Polygon"), "12.123"), (None, "321.12")]).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store[&GeometryType::Polygon], vec!["12.123", "321.12"]);
    }

    #[test]
    fn populate_leading_bare_body() {
        let mut store = GeometryStore::new();
        let result = populate(&mut store, &[(None, "321.12"), (Some("Point"), "1 2")]);
        assert_eq!(result, Err(Error::MalformedLiteral("321.12".into())));
    }

    #[test]
    fn inheritance_does_not_cross_fragments() {
        let fragments = vec!["Point(1 2)", "(3 4)"];
        let result = extract(&fragments);
        assert_eq!(result, Err(Error::MalformedLiteral("3 4".into())));
    }

    #[test]
    fn unknown_keywords_are_skipped() {
        let store = extract(&["Circle 5 Point(1 2)"]).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store[&GeometryType::Point], vec!["1 2"]);
    }

    #[test]
    fn unknown_keyword_after_literal() {
        let store = extract(&["Point(3 4) Circle(1 2)"]).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store[&GeometryType::Point], vec!["3 4"]);
    }

    #[test]
    fn unknown_keyword_before_literal() {
        let store = extract(&["Circle(1 2) Point(3 4)"]).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store[&GeometryType::Point], vec!["3 4"]);
    }

    #[test]
    fn bare_group_after_unknown_keyword() {
        let result = extract(&["Point(1 2) Circle(3 4),(5 6)"]);
        assert_eq!(result, Err(Error::MalformedLiteral("5 6".into())));
    }

    #[test]
    fn first_seen_type_order() {
        let fragments = vec![
            "LineString(1 2, 3 4) Point(5 6)",
            "point(7 8) Polygon((0 0, 1 1, 1 0))",
        ];
        let store = extract(&fragments).unwrap();
        let types: Vec<GeometryType> = store.keys().copied().collect();
        assert_eq!(
            types,
            vec![
                GeometryType::LineString,
                GeometryType::Point,
                GeometryType::Polygon
            ]
        );
        assert_eq!(store[&GeometryType::Point], vec!["5 6", "7 8"]);
    }
}
