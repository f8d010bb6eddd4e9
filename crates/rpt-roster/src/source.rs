//! Roster sources
//!
//! The geometry+attribute reader is an external collaborator; this module
//! defines the narrow interface the store calls through, plus the two
//! in-tree implementations:
//!
//! - [`GeoJsonSource`]: reads a GeoJSON FeatureCollection from disk
//! - [`MemorySource`]: fixture source for tests and demos
//!
//! Sources normalize coordinates to geographic WGS84 before handing
//! features to the store, so everything downstream works in lon/lat
//! degrees regardless of what the file declared.

use crate::error::RosterError;
use crate::geometry::{Coord, Geometry, Polygon};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One raw feature from a source: attributes plus boundary geometry
///
/// Attribute values are stringified; column mapping and identity
/// normalization happen in the store, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFeature {
    pub attributes: HashMap<String, String>,
    pub geometry: Geometry,
}

impl RawFeature {
    /// Create a raw feature
    #[inline]
    #[must_use]
    pub fn new(attributes: HashMap<String, String>, geometry: Geometry) -> Self {
        Self {
            attributes,
            geometry,
        }
    }
}

/// Narrow interface to the roster reader
pub trait RosterSource: Send + Sync + std::fmt::Debug {
    /// Read every feature from the source
    ///
    /// # Errors
    /// Fails when the source is unreadable or structurally invalid; both
    /// are fatal to the interaction. Individually malformed features are
    /// skipped with a warning instead.
    fn read(&self) -> Result<Vec<RawFeature>, RosterError>;

    /// Source name (for diagnostics)
    fn name(&self) -> &'static str;
}

/// Coordinate reference declared by a source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceCrs {
    /// Geographic WGS84 (EPSG 4326), lon/lat degrees, the agreed reference
    #[default]
    Wgs84,
    /// Spherical mercator (EPSG 3857/900913), meters; converted on load
    SphericalMercator,
}

const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Convert a spherical-mercator coordinate to lon/lat degrees
fn mercator_to_wgs84(coord: Coord) -> Coord {
    let lon = (coord.x / EARTH_RADIUS_M).to_degrees();
    let lat = (2.0 * (coord.y / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2)
        .to_degrees();
    Coord::new(lon, lat)
}

/// GeoJSON FeatureCollection source
///
/// Accepts `Polygon` and `MultiPolygon` features. A legacy top-level `crs`
/// member naming spherical mercator triggers reprojection; anything else
/// is treated as already geographic.
#[derive(Debug, Clone)]
pub struct GeoJsonSource {
    path: PathBuf,
}

impl GeoJsonSource {
    /// Create a source reading the given file
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn detect_crs(root: &Value) -> SourceCrs {
        let name = root
            .get("crs")
            .and_then(|crs| crs.get("properties"))
            .and_then(|props| props.get("name"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        if name.contains("3857") || name.contains("900913") {
            SourceCrs::SphericalMercator
        } else {
            SourceCrs::Wgs84
        }
    }

    fn parse_ring(ring: &Value, crs: SourceCrs) -> Option<Vec<Coord>> {
        let positions = ring.as_array()?;
        let mut coords = Vec::with_capacity(positions.len());
        for position in positions {
            let pair = position.as_array()?;
            let x = pair.first()?.as_f64()?;
            let y = pair.get(1)?.as_f64()?;
            let coord = Coord::new(x, y);
            coords.push(match crs {
                SourceCrs::Wgs84 => coord,
                SourceCrs::SphericalMercator => mercator_to_wgs84(coord),
            });
        }
        Some(coords)
    }

    fn parse_polygon(rings: &Value, crs: SourceCrs) -> Option<Polygon> {
        let rings = rings.as_array()?;
        let mut iter = rings.iter();
        let exterior = Self::parse_ring(iter.next()?, crs)?;
        let mut interiors = Vec::new();
        for ring in iter {
            interiors.push(Self::parse_ring(ring, crs)?);
        }
        Some(Polygon {
            exterior,
            interiors,
        })
    }

    fn parse_geometry(geometry: &Value, crs: SourceCrs) -> Option<Geometry> {
        let kind = geometry.get("type")?.as_str()?;
        let coordinates = geometry.get("coordinates")?;
        match kind {
            "Polygon" => Self::parse_polygon(coordinates, crs).map(Geometry::Polygon),
            "MultiPolygon" => {
                let polygons = coordinates
                    .as_array()?
                    .iter()
                    .map(|p| Self::parse_polygon(p, crs))
                    .collect::<Option<Vec<_>>>()?;
                Some(Geometry::MultiPolygon(polygons))
            }
            _ => None,
        }
    }

    fn stringify_properties(properties: Option<&Value>) -> HashMap<String, String> {
        let mut attributes = HashMap::new();
        let Some(Value::Object(map)) = properties else {
            return attributes;
        };
        for (key, value) in map {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                // Null or nested values carry no attribute
                _ => continue,
            };
            attributes.insert(key.clone(), text);
        }
        attributes
    }
}

impl RosterSource for GeoJsonSource {
    fn read(&self) -> Result<Vec<RawFeature>, RosterError> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| RosterError::io_error(&self.path, e))?;
        let root: Value = serde_json::from_str(&content)
            .map_err(|e| RosterError::invalid(&self.path, format!("JSON parse error: {e}")))?;

        if root.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
            return Err(RosterError::invalid(&self.path, "not a FeatureCollection"));
        }
        let features = root
            .get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| RosterError::invalid(&self.path, "missing features array"))?;

        let crs = Self::detect_crs(&root);
        if crs == SourceCrs::SphericalMercator {
            tracing::debug!(path = %self.path.display(), "reprojecting spherical mercator to WGS84");
        }

        let mut raw = Vec::with_capacity(features.len());
        for feature in features {
            let Some(geometry) = feature
                .get("geometry")
                .and_then(|g| Self::parse_geometry(g, crs))
            else {
                tracing::warn!(
                    path = %self.path.display(),
                    "skipping feature without polygon geometry"
                );
                continue;
            };
            let attributes = Self::stringify_properties(feature.get("properties"));
            raw.push(RawFeature::new(attributes, geometry));
        }
        tracing::debug!(path = %self.path.display(), features = raw.len(), "roster source read");
        Ok(raw)
    }

    fn name(&self) -> &'static str {
        "geojson"
    }
}

/// In-memory fixture source
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    features: Vec<RawFeature>,
}

impl MemorySource {
    /// Create a source over fixed features
    #[inline]
    #[must_use]
    pub fn new(features: Vec<RawFeature>) -> Self {
        Self { features }
    }
}

impl RosterSource for MemorySource {
    fn read(&self) -> Result<Vec<RawFeature>, RosterError> {
        Ok(self.features.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
