use crate::Coordinate;
use thiserror::Error;
use wkt::Wkt;

/// The geometries our fixture files may contain.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    MultiPoint(Vec<Coordinate>),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum WktError {
    #[error("malformed WKT: {0}")]
    Parse(String),
    #[error("unsupported WKT geometry; only POINT and MULTIPOINT are handled")]
    UnsupportedGeometry,
    #[error("EMPTY point has no coordinate")]
    EmptyPoint,
}

/// Parse one WKT document, which may hold several geometries.
pub fn parse_wkt(text: &str) -> Result<Vec<Geometry>, WktError> {
    let parsed: Wkt<f64> = Wkt::from_str(text).map_err(|e| WktError::Parse(e.to_string()))?;
    parsed.items.into_iter().map(convert_geometry).collect()
}

/// Parse a WKT document and flatten every geometry into one coordinate list.
pub fn parse_points(text: &str) -> Result<Vec<Coordinate>, WktError> {
    let mut coords = Vec::new();
    for geometry in parse_wkt(text)? {
        match geometry {
            Geometry::Point(coord) => coords.push(coord),
            Geometry::MultiPoint(mut points) => coords.append(&mut points),
        }
    }
    Ok(coords)
}

fn convert_geometry(geometry: wkt::Geometry<f64>) -> Result<Geometry, WktError> {
    match geometry {
        wkt::Geometry::Point(point) => Ok(Geometry::Point(convert_point(point)?)),
        wkt::Geometry::MultiPoint(multi_point) => {
            let coords: Result<Vec<Coordinate>, WktError> =
                multi_point.0.into_iter().map(convert_point).collect();
            Ok(Geometry::MultiPoint(coords?))
        }
        _ => Err(WktError::UnsupportedGeometry),
    }
}

fn convert_point(point: wkt::types::Point<f64>) -> Result<Coordinate, WktError> {
    let coord = point.0.ok_or(WktError::EmptyPoint)?;
    Ok(Coordinate::new(coord.x, coord.y))
}
