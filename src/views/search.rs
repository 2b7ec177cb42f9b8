use std::fmt::Write;

use url::Url;

use crate::models::place::Place;
use crate::services::prompts::SEARCH_RESULT_COUNT;
use crate::views::{empty_state, escape, image, rating, skeleton_cards};

pub fn search_bar(query: Option<&str>, loading: bool) -> String {
    format!(
        r#"<form class="search-bar" method="post" action="/api/search"><input type="text" name="query" placeholder="Search for a destination..." value="{}"><button type="submit"{}>{}</button></form>"#,
        escape(query.unwrap_or("")),
        if loading { " disabled" } else { "" },
        if loading { "Searching..." } else { "Search" }
    )
}

const ROUTE_ORIGIN: &str = "http://guide.local/";

/// Path that selects `place_id`. Model-generated ids may contain `/`, `?` or `#`,
/// so the id is percent-encoded as one path segment.
pub fn select_action(place_id: &str) -> String {
    let mut url = match Url::parse(ROUTE_ORIGIN) {
        Ok(url) => url,
        Err(_) => return "/api/places".to_string(),
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .extend(["api", "places", place_id, "select"]);
    }
    url.path().to_string()
}

pub fn place_card(place: &Place) -> String {
    format!(
        r#"<article class="place-card" data-place-id="{id}"><form method="post" action="{action}"><button type="submit" class="card-link">{img}<span class="badge">{category}</span><h3>{name}</h3>{rating}<p class="address">{address}</p><p class="description">{description}</p></button></form></article>"#,
        id = escape(&place.id),
        action = escape(&select_action(&place.id)),
        img = image(place.cover_photo().unwrap_or(""), "/api/placeholder/400/300", &place.name),
        category = escape(&place.category),
        name = escape(&place.name),
        rating = rating(place.rating),
        address = escape(&place.location.address),
        description = escape(&place.description),
    )
}

/// Result grid: skeletons while searching, nothing before the first search.
pub fn results_grid(results: &[Place], loading: bool) -> String {
    if loading {
        return format!(
            r#"<div class="results-grid">{}</div>"#,
            skeleton_cards(SEARCH_RESULT_COUNT, "place-card")
        );
    }
    if results.is_empty() {
        return String::new();
    }

    let mut cards = String::new();
    for place in results {
        let _ = write!(cards, "{}", place_card(place));
    }
    format!(
        r#"<section class="search-results"><h3>Search Results</h3><div class="results-grid">{}</div></section>"#,
        cards
    )
}

pub fn no_results(query: &str) -> String {
    empty_state(&format!("No destinations found for \"{}\".", query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fallback;

    #[test]
    fn loading_grid_has_six_skeletons() {
        let html = results_grid(&[], true);
        assert_eq!(html.matches("skeleton-image").count(), 6);
        assert!(!html.contains("Search Results"));
    }

    #[test]
    fn idle_grid_is_empty() {
        assert!(results_grid(&[], false).is_empty());
    }

    #[test]
    fn renders_one_card_per_place() {
        let html = results_grid(&[fallback::place(), fallback::place()], false);
        assert!(html.contains("Search Results"));
        assert_eq!(html.matches("place-card\"").count(), 2);
        assert!(html.contains("Santorini, Greece"));
        assert!(html.contains("/api/places/1/select"));
    }

    #[test]
    fn select_action_encodes_the_place_id() {
        assert_eq!(select_action("kyoto"), "/api/places/kyoto/select");
        assert_eq!(select_action("kyoto/japan"), "/api/places/kyoto%2Fjapan/select");
        assert_eq!(select_action("a b?c#d"), "/api/places/a%20b%3Fc%23d/select");

        let mut place = fallback::place();
        place.id = "kyoto/japan".to_string();
        assert!(place_card(&place).contains(r#"action="/api/places/kyoto%2Fjapan/select""#));
    }

    #[test]
    fn search_bar_disables_submit_while_loading() {
        assert!(search_bar(Some("Rome"), true).contains("disabled"));
        assert!(!search_bar(None, false).contains("disabled"));
        assert!(search_bar(Some("<b>"), false).contains("&lt;b&gt;"));
    }
}
