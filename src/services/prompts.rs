use serde_json::{json, Value};

use crate::models::place::Place;
use crate::services::generation_service::GenerationRequest;

pub const SEARCH_RESULT_COUNT: usize = 6;
pub const ATTRACTION_COUNT: usize = 6;
pub const RESTAURANT_COUNT: usize = 4;

pub fn search_request(query: &str, model: &str) -> GenerationRequest {
    GenerationRequest {
        prompt: format!(
            "Search for travel destinations matching \"{}\". Generate {} diverse and interesting places that match the search query. Use real Unsplash photo URLs that match each destination. Make the descriptions engaging and informative.",
            query, SEARCH_RESULT_COUNT
        ),
        schema_name: "places".to_string(),
        schema: places_schema(),
        model: model.to_string(),
    }
}

pub fn attractions_request(place: &Place, model: &str) -> GenerationRequest {
    GenerationRequest {
        prompt: format!(
            "Generate {} nearby attractions for {}. Include diverse types like museums, parks, historic sites, viewpoints, etc. Use real Unsplash photo URLs that match each attraction.",
            ATTRACTION_COUNT, place.name
        ),
        schema_name: "attractions".to_string(),
        schema: attractions_schema(),
        model: model.to_string(),
    }
}

pub fn restaurants_request(place: &Place, model: &str) -> GenerationRequest {
    GenerationRequest {
        prompt: format!(
            "Generate {} food recommendations for {}. Include diverse cuisine types and price ranges. Use real Unsplash food/restaurant photo URLs.",
            RESTAURANT_COUNT, place.name
        ),
        schema_name: "restaurants".to_string(),
        schema: restaurants_schema(),
        model: model.to_string(),
    }
}

pub fn trip_plan_request(place: &Place, model: &str) -> GenerationRequest {
    GenerationRequest {
        prompt: format!(
            "Create a detailed trip plan for {}. Include a realistic duration, key highlights, day-by-day itinerary, and practical travel tips.",
            place.name
        ),
        schema_name: "trip_plan".to_string(),
        schema: trip_plan_schema(),
        model: model.to_string(),
    }
}

fn string_array() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

fn places_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "places": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "location": {
                            "type": "object",
                            "properties": {
                                "lat": { "type": "number" },
                                "lng": { "type": "number" },
                                "address": { "type": "string" }
                            },
                            "required": ["lat", "lng", "address"]
                        },
                        "photos": string_array(),
                        "rating": { "type": "number" },
                        "category": { "type": "string" }
                    },
                    "required": ["id", "name", "description", "location", "photos", "rating", "category"]
                }
            }
        },
        "required": ["places"]
    })
}

fn attractions_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "attractions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "distance": { "type": "string" },
                        "rating": { "type": "number" },
                        "photo": { "type": "string" },
                        "category": { "type": "string" }
                    },
                    "required": ["id", "name", "description", "distance", "rating", "photo", "category"]
                }
            }
        },
        "required": ["attractions"]
    })
}

fn restaurants_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "restaurants": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                        "cuisine": { "type": "string" },
                        "description": { "type": "string" },
                        "rating": { "type": "number" },
                        "priceRange": { "type": "string" },
                        "photo": { "type": "string" },
                        "distance": { "type": "string" }
                    },
                    "required": ["id", "name", "cuisine", "description", "rating", "priceRange", "photo", "distance"]
                }
            }
        },
        "required": ["restaurants"]
    })
}

fn trip_plan_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "destination": { "type": "string" },
            "duration": { "type": "string" },
            "highlights": string_array(),
            "itinerary": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "day": { "type": "integer" },
                        "activities": string_array()
                    },
                    "required": ["day", "activities"]
                }
            },
            "tips": string_array()
        },
        "required": ["destination", "duration", "highlights", "itinerary", "tips"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fallback;

    #[test]
    fn search_prompt_quotes_the_query() {
        let request = search_request("Kyoto temples", "gpt-4o-mini");
        assert!(request.prompt.contains("\"Kyoto temples\""));
        assert!(request.prompt.contains("Generate 6 diverse"));
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.schema["required"], json!(["places"]));
    }

    #[test]
    fn detail_prompts_name_the_place() {
        let place = fallback::place();
        assert!(attractions_request(&place, "m").prompt.contains("6 nearby attractions for Santorini, Greece"));
        assert!(restaurants_request(&place, "m").prompt.contains("4 food recommendations for Santorini, Greece"));
        assert!(trip_plan_request(&place, "m").prompt.contains("trip plan for Santorini, Greece"));
    }

    #[test]
    fn restaurant_schema_uses_camel_case_price_range() {
        let schema = restaurants_schema();
        let required = &schema["properties"]["restaurants"]["items"]["required"];
        assert!(required.as_array().unwrap().contains(&json!("priceRange")));
    }
}
