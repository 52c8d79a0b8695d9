use std::io::Write;

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::{Coord, Document, Folder, Placemark, Result, Style, StyleMap, StyleSelector};

pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Decimal places written for longitude and latitude
///
/// The foot-to-degree constants carry 7 decimal places; 3 more keep rotated
/// corners distinguishable.
pub const COORDINATE_DECIMALS: usize = 10;

/// Serialize a document as indented XML (2 spaces) with a trailing newline
pub fn write_document<W: Write>(doc: &Document, out: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("kml").with_attributes([("xmlns", KML_NAMESPACE)]),
    ))?;
    start(&mut writer, "Document")?;
    text_element(&mut writer, "name", &doc.name)?;
    text_element(&mut writer, "description", &doc.description)?;

    for selector in &doc.styles {
        match selector {
            StyleSelector::Style(style) => write_style(&mut writer, style)?,
            StyleSelector::StyleMap(map) => write_style_map(&mut writer, map)?,
        }
    }

    for folder in &doc.folders {
        write_folder(&mut writer, folder)?;
    }

    end(&mut writer, "Document")?;
    end(&mut writer, "kml")?;

    let mut out = writer.into_inner();
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Serialize a document into a string
pub fn to_string(doc: &Document) -> Result<String> {
    let mut buf = Vec::new();
    write_document(doc, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_style<W: Write>(writer: &mut Writer<W>, style: &Style) -> Result<()> {
    writer.write_event(Event::Start(
        BytesStart::new("Style").with_attributes([("id", style.id.as_str())]),
    ))?;
    if let Some(line) = &style.line {
        start(writer, "LineStyle")?;
        text_element(writer, "color", &line.color)?;
        text_element(writer, "width", &line.width.to_string())?;
        end(writer, "LineStyle")?;
    }
    if let Some(poly) = &style.poly {
        start(writer, "PolyStyle")?;
        text_element(writer, "color", &poly.color)?;
        end(writer, "PolyStyle")?;
    }
    end(writer, "Style")
}

fn write_style_map<W: Write>(writer: &mut Writer<W>, map: &StyleMap) -> Result<()> {
    writer.write_event(Event::Start(
        BytesStart::new("StyleMap").with_attributes([("id", map.id.as_str())]),
    ))?;
    for (key, url) in [("normal", &map.normal), ("highlight", &map.highlight)] {
        start(writer, "Pair")?;
        text_element(writer, "key", key)?;
        text_element(writer, "styleUrl", url)?;
        end(writer, "Pair")?;
    }
    end(writer, "StyleMap")
}

fn write_folder<W: Write>(writer: &mut Writer<W>, folder: &Folder) -> Result<()> {
    start(writer, "Folder")?;
    text_element(writer, "name", &folder.name)?;
    for placemark in &folder.placemarks {
        write_placemark(writer, placemark)?;
    }
    end(writer, "Folder")
}

fn write_placemark<W: Write>(writer: &mut Writer<W>, placemark: &Placemark) -> Result<()> {
    start(writer, "Placemark")?;
    text_element(writer, "name", &placemark.name)?;
    text_element(writer, "description", &placemark.description)?;
    if let Some(url) = &placemark.style_url {
        text_element(writer, "styleUrl", url)?;
    }

    start(writer, "Polygon")?;
    start(writer, "outerBoundaryIs")?;
    start(writer, "LinearRing")?;
    text_element(
        writer,
        "coordinates",
        &format_coordinates(placemark.geometry.outer.coords()),
    )?;
    end(writer, "LinearRing")?;
    end(writer, "outerBoundaryIs")?;
    end(writer, "Polygon")?;

    end(writer, "Placemark")
}

fn format_coordinates(coords: &[Coord]) -> String {
    coords
        .iter()
        .map(|c| {
            format!(
                "{:.prec$},{:.prec$},{}",
                c.lon,
                c.lat,
                c.alt,
                prec = COORDINATE_DECIMALS
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn start<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    start(writer, name)?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    end(writer, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DocumentBuilder, HighlightStyle, LinearRing};

    fn sample_document() -> Document {
        let style = HighlightStyle {
            id: "poly-BDBDBD-1-77".to_string(),
            line_color: "ffbdbdbd".to_string(),
            poly_color: "4dbdbdbd".to_string(),
        };
        let ring = LinearRing::new([
            Coord::ground(-1.9566, 53.83063),
            Coord::ground(-1.9565765, 53.83063),
            Coord::ground(-1.9565765, 53.8306383),
            Coord::ground(-1.9566, 53.8306383),
        ])
        .unwrap();

        let mut builder =
            DocumentBuilder::new("Haworth Cemetery", "Graves").styles(style.selectors());
        builder.placemark(
            "Section C",
            Placemark {
                name: "c-12".to_string(),
                description: "Here lies<br>John & Mary".to_string(),
                style_url: Some(style.url()),
                geometry: ring.into(),
            },
        );
        builder.build()
    }

    #[test]
    fn test_document_structure() {
        let xml = to_string(&sample_document()).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(xml.contains("<kml xmlns=\"http://www.opengis.net/kml/2.2\">"));
        assert!(xml.contains("<Style id=\"poly-BDBDBD-1-77-normal\">"));
        assert!(xml.contains("<Style id=\"poly-BDBDBD-1-77-highlight\">"));
        assert!(xml.contains("<StyleMap id=\"poly-BDBDBD-1-77\">"));
        assert!(xml.contains("<key>highlight</key>"));
        assert!(xml.contains("<styleUrl>#poly-BDBDBD-1-77-normal</styleUrl>"));
        assert!(xml.contains("<width>2</width>"));
        assert!(xml.contains("<name>Section C</name>"));
        assert!(xml.contains("<styleUrl>#poly-BDBDBD-1-77</styleUrl>"));
        assert!(xml.ends_with("</kml>\n"));

        let folder = xml.find("<Folder>").unwrap();
        let document_end = xml.find("</Document>").unwrap();
        assert!(folder < document_end, "folders live inside the document");
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = to_string(&sample_document()).unwrap();
        assert!(xml.contains("<description>Here lies&lt;br"));
        assert!(xml.contains("John &amp; Mary</description>"));
    }

    #[test]
    fn test_indentation() {
        let xml = to_string(&sample_document()).unwrap();
        assert!(xml.contains("\n  <Document>\n    <name>Haworth Cemetery</name>\n"));
    }

    #[test]
    fn test_coordinates_precision() {
        let coords = [Coord::ground(-1.9566, 53.83063), Coord::ground(0.5, 0.25)];
        assert_eq!(
            format_coordinates(&coords),
            "-1.9566000000,53.8306300000,0 0.5000000000,0.2500000000,0"
        );
    }

    #[test]
    fn test_closed_ring_written() {
        let xml = to_string(&sample_document()).unwrap();
        let start = xml.find("<coordinates>").unwrap() + "<coordinates>".len();
        let stop = xml.find("</coordinates>").unwrap();
        let tuples: Vec<&str> = xml[start..stop].split(' ').collect();
        assert_eq!(tuples.len(), 5);
        assert_eq!(tuples.first(), tuples.last());
    }
}
