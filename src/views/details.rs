use std::fmt::Write;

use crate::models::{
    attraction::Attraction, food::FoodRecommendation, place::Place, trip_plan::TripPlan,
};
use crate::services::prompts::{ATTRACTION_COUNT, RESTAURANT_COUNT};
use crate::views::{empty_state, escape, image, rating, skeleton_cards};

pub fn place_details(place: &Place) -> String {
    let mut more_photos = String::new();
    if place.photos.len() > 1 {
        let mut photos = String::new();
        for (index, photo) in place.photos.iter().skip(1).take(3).enumerate() {
            let alt = format!("{} {}", place.name, index + 2);
            let _ = write!(photos, "{}", image(photo, "/api/placeholder/300/200", &alt));
        }
        more_photos = format!(
            r#"<div class="more-photos"><h4>More Photos</h4><div class="photo-grid">{}</div></div>"#,
            photos
        );
    }

    format!(
        r#"<section class="place-details"><form method="post" action="/api/places/back"><button type="submit" class="back">Back to search</button></form><div class="hero">{img}<span class="badge">{category}</span></div><h2>{name}</h2><div class="meta">{rating}<span class="address">{address}</span></div><p class="description">{description}</p>{more_photos}</section>"#,
        img = image(place.cover_photo().unwrap_or(""), "/api/placeholder/800/400", &place.name),
        category = escape(&place.category),
        name = escape(&place.name),
        rating = rating(place.rating),
        address = escape(&place.location.address),
        description = escape(&place.description),
        more_photos = more_photos,
    )
}

pub fn attractions_grid(attractions: &[Attraction], loading: bool) -> String {
    if loading {
        return format!(
            r#"<section class="attractions"><h3>Nearby Attractions</h3><div class="grid">{}</div></section>"#,
            skeleton_cards(ATTRACTION_COUNT, "attraction-card")
        );
    }
    if attractions.is_empty() {
        return empty_state("No nearby attractions found.");
    }

    let mut cards = String::new();
    for attraction in attractions {
        let _ = write!(
            cards,
            r#"<article class="attraction-card">{img}<span class="badge">{category}</span><h4>{name}</h4>{rating}<span class="distance">{distance}</span><p>{description}</p></article>"#,
            img = image(&attraction.photo, "/api/placeholder/300/200", &attraction.name),
            category = escape(&attraction.category),
            name = escape(&attraction.name),
            rating = rating(attraction.rating),
            distance = escape(&attraction.distance),
            description = escape(&attraction.description),
        );
    }
    format!(
        r#"<section class="attractions"><h3>Nearby Attractions</h3><div class="grid">{}</div></section>"#,
        cards
    )
}

pub fn food_recommendations(recommendations: &[FoodRecommendation], loading: bool) -> String {
    if loading {
        return format!(
            r#"<section class="food"><h3>Food Recommendations</h3><div class="grid">{}</div></section>"#,
            skeleton_cards(RESTAURANT_COUNT, "food-card")
        );
    }
    if recommendations.is_empty() {
        return empty_state("No food recommendations found.");
    }

    let mut cards = String::new();
    for restaurant in recommendations {
        let _ = write!(
            cards,
            r#"<article class="food-card">{img}<span class="badge">{cuisine}</span><h4>{name}</h4>{rating}<span class="distance">{distance}</span><span class="price">{price}</span><p>{description}</p></article>"#,
            img = image(&restaurant.photo, "/api/placeholder/400/200", &restaurant.name),
            cuisine = escape(&restaurant.cuisine),
            name = escape(&restaurant.name),
            rating = rating(restaurant.rating),
            distance = escape(&restaurant.distance),
            price = escape(&restaurant.price_range),
            description = escape(&restaurant.description),
        );
    }
    format!(
        r#"<section class="food"><h3>Food Recommendations</h3><div class="grid">{}</div></section>"#,
        cards
    )
}

fn list(items: &[String]) -> String {
    let mut html = String::from("<ul>");
    for item in items {
        let _ = write!(html, "<li>{}</li>", escape(item));
    }
    html.push_str("</ul>");
    html
}

pub fn trip_plan_summary(trip_plan: Option<&TripPlan>, loading: bool) -> String {
    if loading {
        return format!(
            r#"<section class="trip-plan"><h3>AI Trip Planning Summary</h3>{}</section>"#,
            skeleton_cards(1, "trip-plan-card")
        );
    }
    let Some(plan) = trip_plan else {
        return String::new();
    };

    let mut highlights = String::new();
    for highlight in &plan.highlights {
        let _ = write!(highlights, r#"<span class="badge">{}</span>"#, escape(highlight));
    }

    let mut days = String::new();
    for day in &plan.itinerary {
        let _ = write!(
            days,
            r#"<div class="day"><h5>Day {}</h5>{}</div>"#,
            day.day,
            list(&day.activities)
        );
    }

    format!(
        r#"<section class="trip-plan"><h3>AI Trip Planning Summary</h3><div class="trip-plan-card"><h4>{destination}</h4><p class="duration">Recommended duration: {duration}</p><div class="highlights"><h4>Must-See Highlights</h4>{highlights}</div><div class="itinerary"><h4>Suggested Itinerary</h4>{days}</div><div class="tips"><h4>Travel Tips</h4>{tips}</div></div></section>"#,
        destination = escape(&plan.destination),
        duration = escape(&plan.duration),
        highlights = highlights,
        days = days,
        tips = list(&plan.tips),
    )
}
