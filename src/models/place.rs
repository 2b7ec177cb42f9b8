use serde::{Deserialize, Serialize};

/// A candidate travel destination returned by a search.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: PlaceLocation,
    pub photos: Vec<String>,
    pub rating: f64,
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaceLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

impl Place {
    pub fn cover_photo(&self) -> Option<&str> {
        self.photos
            .first()
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }
}

/// Body returned by the search prompt: `{ "places": [...] }`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlacesEnvelope {
    pub places: Vec<Place>,
}
