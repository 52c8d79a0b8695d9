// Grave placement on the map and KML document assembly
mod document;
pub mod geometry;
pub mod grid;
pub mod sequential;
pub mod spiral;
pub mod units;

pub use document::{CEMETERY_NAME, GRAVE_STYLE_ID, grave_style};
pub use geometry::{Footprint, MapOrigin, rotate_about};
pub use grid::{GRID_MAX_SIZE, GRID_ROTATION_DEGREES, Graveyard, grid_document};
pub use sequential::{GRAVES_PER_COLUMN, SequentialLayout, sequential_document};
pub use spiral::{SPIRAL_ANGLE_STEP, rotation_test_document, spiral_angles};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Grave {label} at row {row}, column {col} is outside the {max}x{max} grid")]
    OutOfGrid {
        label: String,
        row: usize,
        col: usize,
        max: usize,
    },

    #[error(transparent)]
    Kml(#[from] grave_kml::KmlError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
