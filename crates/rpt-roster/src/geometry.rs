//! Polygon geometry for suburb boundaries
//!
//! Geometry is immutable once loaded and always expressed in geographic
//! WGS84 coordinates (longitude/latitude degrees). Sources that read other
//! reference systems convert before constructing these types.

use serde::{Deserialize, Serialize};

/// A single coordinate: longitude (`x`) and latitude (`y`) in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    /// Create a coordinate from lon/lat degrees
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A polygon: one exterior ring, zero or more interior rings (holes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Closed exterior ring
    pub exterior: Vec<Coord>,
    /// Interior rings (holes), each closed
    pub interiors: Vec<Vec<Coord>>,
}

impl Polygon {
    /// Create a polygon without holes
    #[inline]
    #[must_use]
    pub fn new(exterior: Vec<Coord>) -> Self {
        Self {
            exterior,
            interiors: Vec::new(),
        }
    }
}

/// Suburb boundary geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Geometry {
    /// All polygons of this geometry
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Self::Polygon(p) => std::slice::from_ref(p),
            Self::MultiPolygon(ps) => ps,
        }
    }

    /// Axis-aligned bounding box over every ring
    ///
    /// Returns `None` for degenerate geometry with no coordinates.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut bbox: Option<BoundingBox> = None;
        for polygon in self.polygons() {
            for coord in polygon
                .exterior
                .iter()
                .chain(polygon.interiors.iter().flatten())
            {
                bbox = Some(match bbox {
                    None => BoundingBox {
                        min_x: coord.x,
                        min_y: coord.y,
                        max_x: coord.x,
                        max_y: coord.y,
                    },
                    Some(b) => b.expanded(*coord),
                });
            }
        }
        bbox
    }
}

/// Axis-aligned bounding box in lon/lat degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Expand to include a coordinate
    #[inline]
    #[must_use]
    pub fn expanded(self, coord: Coord) -> Self {
        Self {
            min_x: self.min_x.min(coord.x),
            min_y: self.min_y.min(coord.y),
            max_x: self.max_x.max(coord.x),
            max_y: self.max_y.max(coord.y),
        }
    }

    /// Merge two boxes
    #[inline]
    #[must_use]
    pub fn merged(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Center point, useful for initial map positioning
    #[inline]
    #[must_use]
    pub fn center(&self) -> Coord {
        Coord::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}
