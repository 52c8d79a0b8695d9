use std::collections::HashMap;

use crate::{Document, Folder, Placemark, StyleSelector};

/// Accumulates styles and placemarks, then freezes them into a [`Document`]
///
/// Folders appear in the order their first placemark (or explicit
/// [`DocumentBuilder::folder`] call) arrived.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    name: String,
    description: String,
    styles: Vec<StyleSelector>,
    folders: Vec<Folder>,
    folder_index: HashMap<String, usize>,
}

impl DocumentBuilder {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn styles(mut self, styles: impl IntoIterator<Item = StyleSelector>) -> Self {
        self.styles.extend(styles);
        self
    }

    /// Ensure a folder exists, even if it ends up empty
    pub fn folder(&mut self, name: &str) -> &mut Folder {
        let idx = match self.folder_index.get(name) {
            Some(&idx) => idx,
            None => {
                self.folders.push(Folder {
                    name: name.to_string(),
                    placemarks: Vec::new(),
                });
                self.folder_index
                    .insert(name.to_string(), self.folders.len() - 1);
                self.folders.len() - 1
            }
        };
        &mut self.folders[idx]
    }

    pub fn placemark(&mut self, folder: &str, placemark: Placemark) -> &mut Self {
        self.folder(folder).placemarks.push(placemark);
        self
    }

    pub fn build(self) -> Document {
        log::debug!(
            "Built KML document {:?} with {} folders",
            self.name,
            self.folders.len()
        );
        Document {
            name: self.name,
            description: self.description,
            styles: self.styles,
            folders: self.folders,
        }
    }
}
