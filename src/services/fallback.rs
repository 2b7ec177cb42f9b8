//! Fixed content shown when the generation service cannot be used.

use crate::models::{
    attraction::Attraction,
    details::{ContentSource, PlaceDetails},
    food::FoodRecommendation,
    place::{Place, PlaceLocation},
    trip_plan::{ItineraryDay, TripPlan},
};

pub fn place() -> Place {
    Place {
        id: "1".to_string(),
        name: "Santorini, Greece".to_string(),
        description: "A stunning Greek island known for its white-washed buildings, blue domes, and breathtaking sunsets over the Aegean Sea.".to_string(),
        location: PlaceLocation {
            lat: 36.3932,
            lng: 25.4615,
            address: "Santorini, Greece".to_string(),
        },
        photos: vec![
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800".to_string(),
        ],
        rating: 4.8,
        category: "Island".to_string(),
    }
}

pub fn search_results() -> Vec<Place> {
    vec![place()]
}

pub fn attractions() -> Vec<Attraction> {
    vec![Attraction {
        id: "1".to_string(),
        name: "Local Museum".to_string(),
        description: "A fascinating museum showcasing local history and culture.".to_string(),
        distance: "0.5 km".to_string(),
        rating: 4.3,
        photo: "https://images.unsplash.com/photo-1554907984-15263bfd63bd?w=400".to_string(),
        category: "Museum".to_string(),
    }]
}

pub fn restaurants() -> Vec<FoodRecommendation> {
    vec![FoodRecommendation {
        id: "1".to_string(),
        name: "Local Taverna".to_string(),
        cuisine: "Mediterranean".to_string(),
        description: "Authentic local cuisine with fresh ingredients.".to_string(),
        rating: 4.6,
        price_range: "$$".to_string(),
        photo: "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=400".to_string(),
        distance: "0.3 km".to_string(),
    }]
}

pub fn trip_plan(destination: &str) -> TripPlan {
    TripPlan {
        destination: destination.to_string(),
        duration: "3-4 days".to_string(),
        highlights: vec![
            "Scenic views".to_string(),
            "Local culture".to_string(),
            "Historic sites".to_string(),
        ],
        itinerary: vec![ItineraryDay {
            day: 1,
            activities: vec![
                "Arrival and check-in".to_string(),
                "Explore city center".to_string(),
                "Welcome dinner".to_string(),
            ],
        }],
        tips: vec![
            "Book accommodations early".to_string(),
            "Try local specialties".to_string(),
            "Bring comfortable shoes".to_string(),
        ],
    }
}

pub fn details(place: &Place) -> PlaceDetails {
    PlaceDetails {
        attractions: attractions(),
        restaurants: restaurants(),
        trip_plan: trip_plan(&place.name),
        source: ContentSource::Fallback,
    }
}
