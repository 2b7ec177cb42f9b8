use serde::Serialize;

use crate::models::{attraction::Attraction, food::FoodRecommendation, trip_plan::TripPlan};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Generated,
    Fallback,
}

/// The three detail collections for one place, always produced together.
#[derive(Debug, Serialize, Clone)]
pub struct PlaceDetails {
    pub attractions: Vec<Attraction>,
    pub restaurants: Vec<FoodRecommendation>,
    pub trip_plan: TripPlan,
    pub source: ContentSource,
}
