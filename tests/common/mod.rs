use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{web, App};
use async_trait::async_trait;
use serde_json::{json, Value};

use travel_guide_api::{
    config::{CallingConvention, GenerationConfig},
    models::user::AuthUser,
    routes,
    services::{
        generation_service::{GenerationError, GenerationRequest, GenerationService, Generator},
        guide_service::GuideService,
        identity_service::{issue_token, IdentityProvider},
    },
    state::session_store::SessionStore,
};

pub const TEST_SECRET: &str = "integration-secret";

/// Replies by schema name; anything not scripted fails like an unreachable service.
#[derive(Default, Clone)]
pub struct ScriptedGenerationService {
    replies: HashMap<String, Value>,
}

impl ScriptedGenerationService {
    pub fn unreachable() -> Self {
        Self::default()
    }

    pub fn with(mut self, schema_name: &str, reply: Value) -> Self {
        self.replies.insert(schema_name.to_string(), reply);
        self
    }

    pub fn kyoto() -> Self {
        Self::default()
            .with("places", places())
            .with("attractions", attractions())
            .with("restaurants", restaurants())
            .with("trip_plan", trip_plan())
    }
}

#[async_trait]
impl GenerationService for ScriptedGenerationService {
    async fn generate_object(&self, request: &GenerationRequest) -> Result<Value, GenerationError> {
        self.replies
            .get(&request.schema_name)
            .cloned()
            .ok_or(GenerationError::Status {
                status: 502,
                body: "bad gateway".to_string(),
            })
    }

    async fn generate_text(&self, _prompt: &str, _model: &str) -> Result<String, GenerationError> {
        Err(GenerationError::EmptyResponse)
    }
}

pub struct TestApp {
    pub guide: web::Data<GuideService>,
    pub sessions: web::Data<SessionStore>,
    pub identity: web::Data<IdentityProvider>,
}

impl TestApp {
    pub fn new(service: ScriptedGenerationService) -> Self {
        Self::with_identity(service, IdentityProvider::with_secret(TEST_SECRET))
    }

    pub fn with_identity(service: ScriptedGenerationService, identity: IdentityProvider) -> Self {
        let config = GenerationConfig {
            convention: CallingConvention::Structured,
            ..GenerationConfig::default()
        };
        let generator = Generator::new(Arc::new(service), &config);

        Self {
            guide: web::Data::new(GuideService::new(generator)),
            sessions: web::Data::new(SessionStore::new()),
            identity: web::Data::new(identity),
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.guide.clone())
            .app_data(self.sessions.clone())
            .app_data(self.identity.clone())
            .configure(routes::configure)
    }
}

pub fn get_test_user() -> AuthUser {
    AuthUser {
        user_id: "test_user_123".to_string(),
        email: "test@example.com".to_string(),
    }
}

pub fn bearer_token() -> String {
    let token = issue_token(TEST_SECRET, &get_test_user(), 3600).expect("token signs");
    format!("Bearer {}", token)
}

pub fn places() -> Value {
    json!({
        "places": [
            {
                "id": "kyoto",
                "name": "Kyoto, Japan",
                "description": "Temples, gardens and tea houses.",
                "location": { "lat": 35.0116, "lng": 135.7681, "address": "Kyoto, Japan" },
                "photos": ["https://images.unsplash.com/kyoto-1"],
                "rating": 4.9,
                "category": "City"
            },
            {
                "id": "osaka",
                "name": "Osaka, Japan",
                "description": "Street food capital.",
                "location": { "lat": 34.6937, "lng": 135.5023, "address": "Osaka, Japan" },
                "photos": [],
                "rating": 4.7,
                "category": "City"
            }
        ]
    })
}

pub fn attractions() -> Value {
    json!({
        "attractions": [{
            "id": "a1",
            "name": "Kinkaku-ji",
            "description": "The golden pavilion.",
            "distance": "6 km",
            "rating": 4.8,
            "photo": "https://images.unsplash.com/kinkakuji",
            "category": "Temple"
        }]
    })
}

pub fn restaurants() -> Value {
    json!({
        "restaurants": [{
            "id": "r1",
            "name": "Pontocho Kaiseki",
            "cuisine": "Japanese",
            "description": "Multi-course dinner by the river.",
            "rating": 4.7,
            "priceRange": "$$$$",
            "photo": "https://images.unsplash.com/kaiseki",
            "distance": "0.8 km"
        }]
    })
}

pub fn trip_plan() -> Value {
    json!({
        "destination": "Kyoto, Japan",
        "duration": "4 days",
        "highlights": ["Temples"],
        "itinerary": [{ "day": 1, "activities": ["Gion at dusk"] }],
        "tips": ["Start early"]
    })
}
