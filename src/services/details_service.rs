use futures::try_join;
use log::{error, info};

use crate::models::{
    attraction::AttractionsEnvelope,
    details::{ContentSource, PlaceDetails},
    food::RestaurantsEnvelope,
    place::Place,
    trip_plan::TripPlan,
};
use crate::services::{fallback, generation_service::Generator, prompts};

/// Generates attractions, restaurants and a trip plan for `place` concurrently.
///
/// The three results are kept only if all three succeed. A single failure discards
/// the others and every category gets its fixed fallback.
pub async fn load_details(generator: &Generator, place: &Place) -> PlaceDetails {
    let model = generator.model();
    let attractions_request = prompts::attractions_request(place, model);
    let restaurants_request = prompts::restaurants_request(place, model);
    let trip_plan_request = prompts::trip_plan_request(place, model);

    let joined = try_join!(
        generator.run::<AttractionsEnvelope>(&attractions_request),
        generator.run::<RestaurantsEnvelope>(&restaurants_request),
        generator.run::<TripPlan>(&trip_plan_request),
    );

    match joined {
        Ok((attractions, restaurants, trip_plan)) => {
            info!(
                "Generated details for '{}': {} attractions, {} restaurants, {} itinerary days",
                place.name,
                attractions.attractions.len(),
                restaurants.restaurants.len(),
                trip_plan.itinerary.len()
            );
            PlaceDetails {
                attractions: attractions.attractions,
                restaurants: restaurants.restaurants,
                trip_plan,
                source: ContentSource::Generated,
            }
        }
        Err(err) => {
            error!("Details error for '{}': {} ({:?})", place.name, err, err.kind());
            fallback::details(place)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CallingConvention;
    use crate::services::test_support::{
        full_script, sample_attractions, sample_restaurants, sample_trip_plan, Reply,
        ScriptedGenerator,
    };
    use serde_json::json;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    fn kyoto() -> Place {
        let mut place = fallback::place();
        place.id = "kyoto".to_string();
        place.name = "Kyoto, Japan".to_string();
        place
    }

    #[tokio::test]
    async fn keeps_all_three_generated_collections() {
        let script = Arc::new(full_script());
        let generator = script.clone().shared_generator(CallingConvention::Structured);
        let details = load_details(&generator, &kyoto()).await;

        assert_eq!(script.calls.load(Ordering::SeqCst), 3);

        assert_eq!(details.source, ContentSource::Generated);
        assert_eq!(details.attractions[0].name, "Fushimi Inari Shrine");
        assert_eq!(details.restaurants[0].price_range, "$");
        assert_eq!(details.trip_plan.duration, "5 days");
        assert_eq!(details.trip_plan.itinerary.len(), 2);
    }

    #[tokio::test]
    async fn unreachable_service_uses_every_fallback() {
        let generator = ScriptedGenerator::new().into_generator(CallingConvention::Structured);
        let details = load_details(&generator, &kyoto()).await;

        assert_eq!(details.source, ContentSource::Fallback);
        assert_eq!(details.attractions.len(), 1);
        assert_eq!(details.attractions[0].name, "Local Museum");
        assert_eq!(details.restaurants.len(), 1);
        assert_eq!(details.restaurants[0].name, "Local Taverna");
        assert_eq!(details.trip_plan.duration, "3-4 days");
        assert_eq!(details.trip_plan.itinerary.len(), 1);
        assert_eq!(details.trip_plan.destination, "Kyoto, Japan");
    }

    #[tokio::test]
    async fn one_failure_discards_the_other_two() {
        let generator = ScriptedGenerator::new()
            .reply("attractions", Reply::Json(sample_attractions()))
            .reply("restaurants", Reply::Json(sample_restaurants()))
            .reply("trip_plan", Reply::Json(json!({ "destination": "Kyoto" })))
            .into_generator(CallingConvention::Structured);
        let details = load_details(&generator, &kyoto()).await;

        assert_eq!(details.source, ContentSource::Fallback);
        assert_eq!(details.attractions[0].name, "Local Museum");
        assert_eq!(details.restaurants[0].name, "Local Taverna");
    }

    #[tokio::test]
    async fn float_itinerary_days_keep_generated_details() {
        let mut trip_plan = sample_trip_plan();
        trip_plan["itinerary"][0]["day"] = json!(1.0);
        trip_plan["itinerary"][1]["day"] = json!(2.0);

        let generator = full_script()
            .reply("trip_plan", Reply::Json(trip_plan))
            .into_generator(CallingConvention::Structured);
        let details = load_details(&generator, &kyoto()).await;

        assert_eq!(details.source, ContentSource::Generated);
        assert_eq!(details.attractions[0].name, "Fushimi Inari Shrine");
        assert_eq!(details.trip_plan.itinerary[1].day, 2);
    }
}
