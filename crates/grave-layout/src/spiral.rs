//! Rotation test pattern: one grid plot rotated through a full circle about
//! the origin, to check that rotated polygons render where expected.

use grave_kml::{Document, DocumentBuilder};
use grave_records::GridPosition;

use crate::Result;
use crate::document::{grave_placemark, grave_style};
use crate::geometry::MapOrigin;
use crate::grid::slot_footprint;

pub const SPIRAL_ANGLE_STEP: f64 = 4.0;
const SPIRAL_SLOT: GridPosition = GridPosition { row: 5, col: 1 };

/// 0, 4, 8, ... up to but excluding 360
pub fn spiral_angles() -> impl Iterator<Item = f64> {
    std::iter::successors(Some(0.0), |angle| Some(angle + SPIRAL_ANGLE_STEP))
        .take_while(|angle| *angle < 360.0)
}

pub fn rotation_test_document(origin: MapOrigin) -> Result<Document> {
    let style = grave_style();
    let mut builder = DocumentBuilder::new(
        "Test Rotation",
        "This is a test of the polygon rotation feature.",
    )
    .styles(style.selectors());

    for angle in spiral_angles() {
        let corners = slot_footprint(origin, SPIRAL_SLOT, angle);
        let placemark = grave_placemark(
            format!("Degrees: {angle:.1}"),
            "Test Rotation".to_string(),
            &corners,
        )?;
        builder.placemark("Section Rotation-Test", placemark);
    }

    Ok(builder.build())
}
