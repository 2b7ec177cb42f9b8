use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::debug;
use serde_json::json;

use crate::services::{
    details_service::load_details, generation_service::Generator, search_service::search_places,
};
use crate::state::{session_store::SessionHandle, view_state::ViewSnapshot};

#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    #[error("search query must not be empty")]
    EmptyQuery,
    #[error("place {0} is not among the current search results")]
    PlaceNotFound(String),
}

impl ResponseError for GuideError {
    fn status_code(&self) -> StatusCode {
        match self {
            GuideError::EmptyQuery => StatusCode::BAD_REQUEST,
            GuideError::PlaceNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Drives one user's view through search, selection and back.
#[derive(Clone)]
pub struct GuideService {
    generator: Generator,
}

impl GuideService {
    pub fn new(generator: Generator) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    pub async fn search(
        &self,
        session: &SessionHandle,
        query: &str,
    ) -> Result<ViewSnapshot, GuideError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GuideError::EmptyQuery);
        }

        let ticket = session.lock().begin_search(query);
        let results = search_places(&self.generator, query).await;

        let mut state = session.lock();
        state.finish_search(ticket, results.places, results.source);
        Ok(state.snapshot())
    }

    pub async fn select_place(
        &self,
        session: &SessionHandle,
        place_id: &str,
    ) -> Result<ViewSnapshot, GuideError> {
        let (ticket, place) = {
            let mut state = session.lock();
            let place = state
                .find_result(place_id)
                .cloned()
                .ok_or_else(|| GuideError::PlaceNotFound(place_id.to_string()))?;
            (state.begin_details(place.clone()), place)
        };
        debug!("Loading details for '{}'", place.name);

        let details = load_details(&self.generator, &place).await;

        let mut state = session.lock();
        state.finish_details(ticket, details);
        Ok(state.snapshot())
    }

    pub fn back(&self, session: &SessionHandle) -> ViewSnapshot {
        let mut state = session.lock();
        state.back();
        state.snapshot()
    }

    pub fn snapshot(&self, session: &SessionHandle) -> ViewSnapshot {
        session.lock().snapshot()
    }
}
