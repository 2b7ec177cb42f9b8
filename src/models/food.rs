use serde::{Deserialize, Serialize};

/// A restaurant or eatery suggestion near a selected place.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FoodRecommendation {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub description: String,
    pub rating: f64,
    #[serde(rename = "priceRange")]
    pub price_range: String, // "$", "$$", ...
    pub photo: String,
    pub distance: String,
}

/// The food prompt asks for `{ "restaurants": [...] }`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RestaurantsEnvelope {
    pub restaurants: Vec<FoodRecommendation>,
}
