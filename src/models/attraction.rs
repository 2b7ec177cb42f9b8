use serde::{Deserialize, Serialize};

/// A point of interest near a selected place.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Attraction {
    pub id: String,
    pub name: String,
    pub description: String,
    pub distance: String, // free text, e.g. "0.5 km"
    pub rating: f64,
    pub photo: String,
    pub category: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AttractionsEnvelope {
    pub attractions: Vec<Attraction>,
}
