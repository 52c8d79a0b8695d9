use glam::DVec2;
use grave_kml::{Document, DocumentBuilder};
use grave_records::GraveRecord;

use crate::Result;
use crate::document::{CEMETERY_NAME, CHURCH, grave_placemark, grave_style};
use crate::geometry::{Footprint, MapOrigin};
use crate::units::{LAT_2FEET, LONG_2FEET};

pub const GRAVES_PER_COLUMN: usize = 10;

/// Endless sequence of plot corners filling columns of
/// [`GRAVES_PER_COLUMN`] graves northwards, then stepping east
#[derive(Debug, Clone)]
pub struct SequentialLayout {
    origin: MapOrigin,
    next: DVec2,
    placed: usize,
}

impl SequentialLayout {
    pub fn new(origin: MapOrigin) -> Self {
        Self {
            origin,
            next: origin.as_dvec2(),
            placed: 0,
        }
    }
}

impl Iterator for SequentialLayout {
    type Item = DVec2;

    fn next(&mut self) -> Option<DVec2> {
        let corner = self.next;
        self.next.y += LAT_2FEET * 2.0;
        self.placed += 1;
        if self.placed % GRAVES_PER_COLUMN == 0 {
            self.next.x += LONG_2FEET * 2.0;
            self.next.y = self.origin.lat;
        }
        Some(corner)
    }
}

/// All graves in one folder named `section_name`, laid out in input order
pub fn sequential_document(
    origin: MapOrigin,
    section_name: &str,
    graves: &[GraveRecord],
) -> Result<Document> {
    let style = grave_style();
    let mut builder = DocumentBuilder::new(
        CEMETERY_NAME,
        format!("This is a map of graves in {CHURCH}."),
    )
    .styles(style.selectors());
    builder.folder(section_name);

    for (grave, corner) in graves.iter().zip(SequentialLayout::new(origin)) {
        let corners = Footprint::SEQUENTIAL.corners(corner);
        let placemark = grave_placemark(grave.label(), grave.inscription_html(), &corners)?;
        builder.placemark(section_name, placemark);
    }

    log::info!("Placed {} graves in sequence", graves.len());
    Ok(builder.build())
}
