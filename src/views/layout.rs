use crate::models::user::{AuthState, AuthUser};
use crate::state::view_state::ViewState;
use crate::views::{details, escape, search};

const TITLE: &str = "AI Travel Guide";

fn document(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{}</title></head><body>{}</body></html>"#,
        TITLE, body
    )
}

pub fn loading_screen() -> String {
    document(r#"<div class="loading-screen"><div class="spinner"></div><p>Loading...</p></div>"#)
}

pub fn sign_in_prompt() -> String {
    document(&format!(
        r#"<div class="sign-in"><h1>{}</h1><p>Please sign in to start planning your trip</p></div>"#,
        TITLE
    ))
}

fn header(user: &AuthUser) -> String {
    format!(
        r#"<header><div class="brand"><h1>{}</h1><p>Discover amazing destinations with AI</p></div><span class="welcome">Welcome, {}</span></header>"#,
        TITLE,
        escape(&user.email)
    )
}

/// Place panel plus the three detail sections, or `None` when nothing is selected.
pub fn detail_view(state: &ViewState) -> Option<String> {
    let place = state.selected()?;
    Some(format!(
        "{}{}{}{}",
        details::place_details(place),
        details::attractions_grid(state.attractions(), state.details_loading()),
        details::food_recommendations(state.restaurants(), state.details_loading()),
        details::trip_plan_summary(state.trip_plan(), state.details_loading())
    ))
}

/// The main column: search view or detail view depending on the selection.
pub fn main_content(state: &ViewState) -> String {
    if let Some(detail) = detail_view(state) {
        return format!("<main>{}</main>", detail);
    }

    let mut results = search::results_grid(state.results(), state.search_loading());
    if results.is_empty() {
        if let Some(query) = state.query().filter(|_| state.has_searched()) {
            results = search::no_results(query);
        }
    }

    format!(
        r#"<main><section class="hero"><h2>Plan Your Perfect Trip</h2><p>Discover amazing destinations, find nearby attractions, get food recommendations, and receive AI-powered trip planning summaries.</p>{}</section>{}</main>"#,
        search::search_bar(state.query(), state.search_loading()),
        results
    )
}

/// The full page for the given auth state.
pub fn app_page(auth: &AuthState, state: Option<&ViewState>) -> String {
    if auth.is_loading {
        return loading_screen();
    }
    match (&auth.user, state) {
        (Some(user), Some(state)) => {
            document(&format!("{}{}", header(user), main_content(state)))
        }
        (Some(user), None) => document(&format!(
            "{}{}",
            header(user),
            main_content(&ViewState::default())
        )),
        (None, _) => sign_in_prompt(),
    }
}
