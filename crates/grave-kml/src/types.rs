use crate::{KmlError, Result};

/// A `lon,lat,alt` tuple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
    pub alt: f64,
}

impl Coord {
    pub fn new(lon: f64, lat: f64, alt: f64) -> Self {
        Self { lon, lat, alt }
    }

    /// Point on the ground (altitude 0)
    pub fn ground(lon: f64, lat: f64) -> Self {
        Self::new(lon, lat, 0.0)
    }
}

/// Closed ring of coordinates; the first and last points are always equal
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing {
    coords: Vec<Coord>,
}

impl LinearRing {
    /// Build a ring, appending the first point when the input is open
    pub fn new(points: impl IntoIterator<Item = Coord>) -> Result<Self> {
        let mut coords: Vec<Coord> = points.into_iter().collect();
        if coords.len() > 1 && coords.first() == coords.last() {
            coords.pop();
        }
        if coords.len() < 3 {
            return Err(KmlError::TooFewPoints(coords.len()));
        }
        coords.push(coords[0]);
        Ok(Self { coords })
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Twice the signed area in the lon/lat plane; positive when wound
    /// counter-clockwise
    pub fn signed_area2(&self) -> f64 {
        // Relative to the first point, so small rings far from (0, 0) keep
        // their precision.
        let origin = self.coords[0];
        self.coords
            .windows(2)
            .map(|w| {
                let (ax, ay) = (w[0].lon - origin.lon, w[0].lat - origin.lat);
                let (bx, by) = (w[1].lon - origin.lon, w[1].lat - origin.lat);
                ax * by - bx * ay
            })
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub outer: LinearRing,
}

impl From<LinearRing> for Polygon {
    fn from(outer: LinearRing) -> Self {
        Self { outer }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    pub name: String,
    pub description: String,
    pub style_url: Option<String>,
    pub geometry: Polygon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    pub name: String,
    pub placemarks: Vec<Placemark>,
}

/// Colors are KML `aabbggrr` hex strings
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolyStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub id: String,
    pub line: Option<LineStyle>,
    pub poly: Option<PolyStyle>,
}

/// Normal/highlight pair of style URLs
#[derive(Debug, Clone, PartialEq)]
pub struct StyleMap {
    pub id: String,
    pub normal: String,
    pub highlight: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StyleSelector {
    Style(Style),
    StyleMap(StyleMap),
}

impl StyleSelector {
    pub fn id(&self) -> &str {
        match self {
            StyleSelector::Style(style) => &style.id,
            StyleSelector::StyleMap(map) => &map.id,
        }
    }
}

/// Normal and highlight polygon styles plus the style map joining them
///
/// The highlight style differs only by a wider outline. Placemarks refer to
/// the style map through [`HighlightStyle::url`].
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightStyle {
    pub id: String,
    pub line_color: String,
    pub poly_color: String,
}

impl HighlightStyle {
    pub fn url(&self) -> String {
        format!("#{}", self.id)
    }

    pub fn selectors(&self) -> Vec<StyleSelector> {
        let normal_id = format!("{}-normal", self.id);
        let highlight_id = format!("{}-highlight", self.id);
        let style = |id: &str, width: f64| {
            StyleSelector::Style(Style {
                id: id.to_string(),
                line: Some(LineStyle {
                    color: self.line_color.clone(),
                    width,
                }),
                poly: Some(PolyStyle {
                    color: self.poly_color.clone(),
                }),
            })
        };

        vec![
            style(&normal_id, 1.0),
            style(&highlight_id, 2.0),
            StyleSelector::StyleMap(StyleMap {
                id: self.id.clone(),
                normal: format!("#{normal_id}"),
                highlight: format!("#{highlight_id}"),
            }),
        ]
    }
}

/// Root of a KML file; build with [`crate::DocumentBuilder`]
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) styles: Vec<StyleSelector>,
    pub(crate) folders: Vec<Folder>,
}

impl Document {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn styles(&self) -> &[StyleSelector] {
        &self.styles
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn placemarks(&self) -> impl Iterator<Item = &Placemark> {
        self.folders.iter().flat_map(|f| f.placemarks.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Coord> {
        vec![
            Coord::ground(0.0, 0.0),
            Coord::ground(1.0, 0.0),
            Coord::ground(1.0, 1.0),
            Coord::ground(0.0, 1.0),
        ]
    }

    #[test]
    fn test_open_ring_is_closed() {
        let ring = LinearRing::new(square()).unwrap();
        assert_eq!(ring.coords().len(), 5);
        assert_eq!(ring.coords().first(), ring.coords().last());
    }

    #[test]
    fn test_closed_ring_is_unchanged() {
        let mut points = square();
        points.push(points[0]);
        let ring = LinearRing::new(points.clone()).unwrap();
        assert_eq!(ring.coords(), points.as_slice());
    }

    #[test]
    fn test_degenerate_ring() {
        let err = LinearRing::new([Coord::ground(0.0, 0.0), Coord::ground(1.0, 0.0)]);
        assert!(matches!(err, Err(KmlError::TooFewPoints(2))));

        let closed_line = LinearRing::new([
            Coord::ground(0.0, 0.0),
            Coord::ground(1.0, 0.0),
            Coord::ground(0.0, 0.0),
        ]);
        let err = closed_line.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Linear ring needs at least 3 points before closing, got 2"
        );
    }

    #[test]
    fn test_winding() {
        let ccw = LinearRing::new(square()).unwrap();
        assert!(ccw.signed_area2() > 0.0);

        let cw = LinearRing::new(square().into_iter().rev()).unwrap();
        assert!(cw.signed_area2() < 0.0);
    }

    #[test]
    fn test_highlight_style_selectors() {
        let style = HighlightStyle {
            id: "poly-1".to_string(),
            line_color: "ff000000".to_string(),
            poly_color: "4d000000".to_string(),
        };
        let selectors = style.selectors();
        let ids: Vec<&str> = selectors.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["poly-1-normal", "poly-1-highlight", "poly-1"]);
        assert_eq!(style.url(), "#poly-1");

        match &selectors[2] {
            StyleSelector::StyleMap(map) => {
                assert_eq!(map.normal, "#poly-1-normal");
                assert_eq!(map.highlight, "#poly-1-highlight");
            }
            other => panic!("expected style map, got {other:?}"),
        }
    }
}
