use serde::Deserialize;

/// A single transcribed grave marker
///
/// Identity is the (section, id) pair. Records are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraveRecord {
    section: String,
    #[serde(rename = "grave_id")]
    id: String,
    inscription: String,
}

impl GraveRecord {
    pub fn new(
        section: impl Into<String>,
        id: impl Into<String>,
        inscription: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            id: id.into(),
            inscription: inscription.into(),
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn inscription(&self) -> &str {
        &self.inscription
    }

    /// Map label for this grave, e.g. `C-142A`
    pub fn label(&self) -> String {
        format!("{}-{}", self.section, self.id)
    }

    /// Inscription with embedded newlines replaced by `<br>` for map popups
    pub fn inscription_html(&self) -> String {
        self.inscription.replace("\r\n", "<br>").replace('\n', "<br>")
    }

    /// Format as `"section",id,"inscription"`
    ///
    /// Section and inscription are always quoted, the id never is. Embedded
    /// quotes are doubled and embedded newlines are written as-is.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{}",
            quoted(&self.section),
            self.id,
            quoted(&self.inscription)
        )
    }
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Slot of a grave in a rectangular section layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
