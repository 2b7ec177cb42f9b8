use log::debug;
use serde::Serialize;

use crate::models::{
    attraction::Attraction,
    details::{ContentSource, PlaceDetails},
    food::FoodRecommendation,
    place::Place,
    trip_plan::TripPlan,
};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViewPhase {
    Idle,
    Searching,
    ResultsShown,
    LoadingDetails,
    DetailsShown,
}

/// Identifies one search or detail request so its response can be matched against
/// the state that is current when it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Everything one user currently sees. Lives only in memory.
#[derive(Debug, Default)]
pub struct ViewState {
    last_query: Option<String>,
    results: Vec<Place>,
    results_source: Option<ContentSource>,
    selected: Option<Place>,
    attractions: Vec<Attraction>,
    restaurants: Vec<FoodRecommendation>,
    trip_plan: Option<TripPlan>,
    details_source: Option<ContentSource>,
    search_loading: bool,
    details_loading: bool,
    next_ticket: u64,
    latest_search: Option<RequestTicket>,
    latest_details: Option<RequestTicket>,
    // Detail request whose response may still be applied. Cleared by back and new searches.
    active_selection: Option<RequestTicket>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ViewSnapshot {
    pub phase: ViewPhase,
    pub query: Option<String>,
    pub search_loading: bool,
    pub details_loading: bool,
    pub results: Vec<Place>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_source: Option<ContentSource>,
    pub selected_place: Option<Place>,
    pub attractions: Vec<Attraction>,
    pub food_recommendations: Vec<FoodRecommendation>,
    pub trip_plan: Option<TripPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_source: Option<ContentSource>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue_ticket(&mut self) -> RequestTicket {
        self.next_ticket += 1;
        RequestTicket(self.next_ticket)
    }

    fn clear_details(&mut self) {
        self.attractions.clear();
        self.restaurants.clear();
        self.trip_plan = None;
        self.details_source = None;
    }

    /// Starts a search: clears results and selection and raises `search_loading`.
    pub fn begin_search(&mut self, query: &str) -> RequestTicket {
        let ticket = self.issue_ticket();
        self.last_query = Some(query.to_string());
        self.latest_search = Some(ticket);
        self.search_loading = true;
        self.results.clear();
        self.results_source = None;
        self.selected = None;
        self.active_selection = None;
        self.clear_details();
        ticket
    }

    /// Settles a search. Returns whether the results were applied.
    pub fn finish_search(
        &mut self,
        ticket: RequestTicket,
        places: Vec<Place>,
        source: ContentSource,
    ) -> bool {
        if self.latest_search != Some(ticket) {
            debug!("Dropping stale search response {:?}", ticket);
            return false;
        }
        self.search_loading = false;
        self.results = places;
        self.results_source = Some(source);
        true
    }

    /// Selects `place`, clears the previous details and raises `details_loading`.
    pub fn begin_details(&mut self, place: Place) -> RequestTicket {
        let ticket = self.issue_ticket();
        self.selected = Some(place);
        self.clear_details();
        self.details_loading = true;
        self.latest_details = Some(ticket);
        self.active_selection = Some(ticket);
        ticket
    }

    /// Settles a detail request. The loading flag follows the latest request; the
    /// content is applied only if the request still matches the active selection.
    pub fn finish_details(&mut self, ticket: RequestTicket, details: PlaceDetails) -> bool {
        if self.latest_details == Some(ticket) {
            self.details_loading = false;
        }
        if self.active_selection != Some(ticket) {
            debug!("Dropping stale details response {:?}", ticket);
            return false;
        }
        self.attractions = details.attractions;
        self.restaurants = details.restaurants;
        self.trip_plan = Some(details.trip_plan);
        self.details_source = Some(details.source);
        true
    }

    /// Returns to the result grid.
    pub fn back(&mut self) {
        self.selected = None;
        self.active_selection = None;
        self.clear_details();
    }

    pub fn find_result(&self, place_id: &str) -> Option<&Place> {
        self.results.iter().find(|place| place.id == place_id)
    }

    pub fn phase(&self) -> ViewPhase {
        match (&self.selected, self.search_loading) {
            (Some(_), _) if self.details_loading => ViewPhase::LoadingDetails,
            (Some(_), _) => ViewPhase::DetailsShown,
            (None, true) => ViewPhase::Searching,
            (None, false) if !self.results.is_empty() => ViewPhase::ResultsShown,
            (None, false) => ViewPhase::Idle,
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// True once a search has settled, even if it produced no places.
    pub fn has_searched(&self) -> bool {
        self.results_source.is_some()
    }

    pub fn results(&self) -> &[Place] {
        &self.results
    }

    pub fn selected(&self) -> Option<&Place> {
        self.selected.as_ref()
    }

    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    pub fn restaurants(&self) -> &[FoodRecommendation] {
        &self.restaurants
    }

    pub fn trip_plan(&self) -> Option<&TripPlan> {
        self.trip_plan.as_ref()
    }

    pub fn search_loading(&self) -> bool {
        self.search_loading
    }

    pub fn details_loading(&self) -> bool {
        self.details_loading
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            phase: self.phase(),
            query: self.last_query.clone(),
            search_loading: self.search_loading,
            details_loading: self.details_loading,
            results: self.results.clone(),
            results_source: self.results_source,
            selected_place: self.selected.clone(),
            attractions: self.attractions.clone(),
            food_recommendations: self.restaurants.clone(),
            trip_plan: self.trip_plan.clone(),
            details_source: self.details_source,
        }
    }
}
