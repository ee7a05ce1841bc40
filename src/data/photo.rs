use serde::{Deserialize, Serialize};

/// A photo shown on one polaroid panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u32,
    /// Image reference handed to the display layer as-is
    pub url: String,
}

impl Photo {
    pub fn new(id: u32, url: &str) -> Self {
        Self {
            id,
            url: url.to_string(),
        }
    }
}

/// Photos in panel order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhotoAlbum {
    photos: Vec<Photo>,
}

impl PhotoAlbum {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self { photos }
    }

    pub fn get(&self, id: u32) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.photos.iter().map(|p| p.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Replace the url of photo `id`; every other entry is left untouched.
    /// The url is not validated. Returns whether a photo matched.
    pub fn set_url(&mut self, id: u32, url: &str) -> bool {
        match self.photos.iter_mut().find(|p| p.id == id) {
            Some(photo) => {
                photo.url = url.to_string();
                true
            }
            None => false,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }
}
