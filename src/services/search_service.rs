use log::{error, info, warn};

use crate::models::{
    details::ContentSource,
    place::{Place, PlacesEnvelope},
};
use crate::services::{
    fallback,
    generation_service::Generator,
    prompts::{self, SEARCH_RESULT_COUNT},
};

#[derive(Debug, Clone)]
pub struct SearchResults {
    pub places: Vec<Place>,
    pub source: ContentSource,
}

/// Asks the generation service for destinations matching `query`.
///
/// Never fails: any service or parse error is logged and replaced by the fixed
/// single-place result.
pub async fn search_places(generator: &Generator, query: &str) -> SearchResults {
    let request = prompts::search_request(query, generator.model());

    match generator.run::<PlacesEnvelope>(&request).await {
        Ok(envelope) => {
            if envelope.places.len() != SEARCH_RESULT_COUNT {
                warn!(
                    "Search for '{}' returned {} places (asked for {})",
                    query,
                    envelope.places.len(),
                    SEARCH_RESULT_COUNT
                );
            }
            info!("Search for '{}' produced {} places", query, envelope.places.len());
            SearchResults {
                places: envelope.places,
                source: ContentSource::Generated,
            }
        }
        Err(err) => {
            error!("Search error: {} ({:?})", err, err.kind());
            SearchResults {
                places: fallback::search_results(),
                source: ContentSource::Fallback,
            }
        }
    }
}
