use std::collections::{BTreeMap, BTreeSet};

use glam::DVec2;
use grave_kml::{Document, DocumentBuilder};
use grave_records::{GraveRecord, GridPosition};

use crate::document::{CEMETERY_NAME, CHURCH, grave_placemark, grave_style};
use crate::geometry::{Footprint, MapOrigin, rotate_about};
use crate::units::{LAT_2FEET, LONG_2FEET};
use crate::{LayoutError, Result};

/// Rows and columns per axis
pub const GRID_MAX_SIZE: usize = 1000;

/// Counter-clockwise correction applied to every grid plot
pub const GRID_ROTATION_DEGREES: f64 = 2.0;

/// South-west corner of a slot before rotation
///
/// Rows advance east (longitude) by 6ft, columns advance north (latitude)
/// by 4ft.
pub fn slot_corner(origin: MapOrigin, slot: GridPosition) -> DVec2 {
    DVec2::new(
        origin.lon + slot.row as f64 * (LONG_2FEET * 3.0),
        origin.lat + slot.col as f64 * (LAT_2FEET * 2.0),
    )
}

/// Footprint of a slot, rotated about the origin
pub fn slot_footprint(origin: MapOrigin, slot: GridPosition, degrees: f64) -> [DVec2; 5] {
    let mut corners = Footprint::GRID.corners(slot_corner(origin, slot));
    rotate_about(&mut corners, origin.as_dvec2(), degrees);
    corners
}

/// Sparse row/column layout of a cemetery section
#[derive(Debug, Default)]
pub struct Graveyard {
    slots: BTreeMap<GridPosition, GraveRecord>,
}

impl Graveyard {
    /// Place graves in their slots; a later grave replaces an earlier one in
    /// the same slot
    pub fn from_records(
        placed: impl IntoIterator<Item = (GridPosition, GraveRecord)>,
    ) -> Result<Self> {
        let mut slots = BTreeMap::new();
        for (slot, grave) in placed {
            if slot.row >= GRID_MAX_SIZE || slot.col >= GRID_MAX_SIZE {
                return Err(LayoutError::OutOfGrid {
                    label: grave.label(),
                    row: slot.row,
                    col: slot.col,
                    max: GRID_MAX_SIZE,
                });
            }
            if let Some(previous) = slots.insert(slot, grave) {
                log::warn!(
                    "Row {} column {}: {} replaced by a later grave",
                    slot.row,
                    slot.col,
                    previous.label()
                );
            }
        }
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Occupied slots in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridPosition, &GraveRecord)> {
        self.slots.iter().map(|(slot, grave)| (*slot, grave))
    }

    fn sections(&self) -> BTreeSet<&str> {
        self.slots.values().map(|grave| grave.section()).collect()
    }
}

fn description(sections: &BTreeSet<&str>) -> String {
    if sections.is_empty() {
        return format!("This is a map of graves of {CHURCH}.");
    }
    let sections: Vec<&str> = sections.iter().copied().collect();
    format!(
        "This is a map of graves for section {} of {CHURCH}.",
        sections.join(", ")
    )
}

/// One folder per section, one rotated plot per occupied slot
pub fn grid_document(origin: MapOrigin, graveyard: &Graveyard) -> Result<Document> {
    let style = grave_style();
    let mut builder = DocumentBuilder::new(CEMETERY_NAME, description(&graveyard.sections()))
        .styles(style.selectors());

    for (slot, grave) in graveyard.iter() {
        let corners = slot_footprint(origin, slot, GRID_ROTATION_DEGREES);
        let placemark = grave_placemark(
            grave.label().to_lowercase(),
            grave.inscription_html(),
            &corners,
        )?;
        builder.placemark(&format!("Section {}", grave.section()), placemark);
    }

    log::info!("Placed {} graves on the grid", graveyard.len());
    Ok(builder.build())
}
