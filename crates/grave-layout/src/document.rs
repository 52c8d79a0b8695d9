use glam::DVec2;
use grave_kml::{HighlightStyle, Placemark};

use crate::Result;
use crate::geometry::ring;

pub const CEMETERY_NAME: &str = "Haworth Cemetery";
pub const CHURCH: &str = "St Michael and All Angels's Church, Haworth UK";

/// Grey outline with a translucent grey fill, as exported by Google My Maps
pub const GRAVE_STYLE_ID: &str = "poly-BDBDBD-1-77";
const GRAVE_LINE_COLOR: &str = "ffbdbdbd";
const GRAVE_POLY_COLOR: &str = "4dbdbdbd";

pub fn grave_style() -> HighlightStyle {
    HighlightStyle {
        id: GRAVE_STYLE_ID.to_string(),
        line_color: GRAVE_LINE_COLOR.to_string(),
        poly_color: GRAVE_POLY_COLOR.to_string(),
    }
}

pub(crate) fn grave_placemark(
    name: String,
    description: String,
    corners: &[DVec2],
) -> Result<Placemark> {
    Ok(Placemark {
        name,
        description,
        style_url: Some(grave_style().url()),
        geometry: ring(corners)?.into(),
    })
}
