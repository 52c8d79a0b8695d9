use glam::{DMat2, DVec2};
use grave_kml::{Coord, LinearRing};

use crate::units::{LAT_3FEET, LONG_2FEET, LONG_3FEET};

/// Layout anchor and rotation pivot, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOrigin {
    pub lon: f64,
    pub lat: f64,
}

impl MapOrigin {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.lon, self.lat)
    }
}

/// Footprint size in degrees (x = longitude, y = latitude)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

impl Footprint {
    /// 5ft x 3ft plot used by the row/column layouts
    pub const GRID: Footprint = Footprint {
        width: LONG_3FEET + LONG_2FEET,
        height: LAT_3FEET,
    };

    /// 3ft x 3ft plot used by the sequential layout
    pub const SEQUENTIAL: Footprint = Footprint {
        width: LONG_3FEET,
        height: LAT_3FEET,
    };

    /// Closed ring, counter-clockwise from the south-west `corner`
    pub fn corners(&self, corner: DVec2) -> [DVec2; 5] {
        let DVec2 { x, y } = corner;
        [
            DVec2::new(x, y),
            DVec2::new(x + self.width, y),
            DVec2::new(x + self.width, y + self.height),
            DVec2::new(x, y + self.height),
            DVec2::new(x, y),
        ]
    }
}

/// Rotate points counter-clockwise by `degrees` about `pivot`
pub fn rotate_about(points: &mut [DVec2], pivot: DVec2, degrees: f64) {
    let rotation = DMat2::from_angle(degrees.to_radians());
    for point in points {
        *point = pivot + rotation * (*point - pivot);
    }
}

pub(crate) fn ring(points: &[DVec2]) -> grave_kml::Result<LinearRing> {
    LinearRing::new(points.iter().map(|p| Coord::ground(p.x, p.y)))
}
