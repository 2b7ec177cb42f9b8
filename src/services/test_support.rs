use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Semaphore;

use crate::config::{CallingConvention, GenerationConfig};
use crate::services::generation_service::{
    GenerationError, GenerationRequest, GenerationService, Generator,
};

#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Text(String),
    Fail,
}

/// Answers each prompt kind with a canned reply, keyed by schema name.
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: HashMap<&'static str, Reply>,
    gate: Option<Arc<Semaphore>>,
    pub calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, schema_name: &'static str, reply: Reply) -> Self {
        self.replies.insert(schema_name, reply);
        self
    }

    /// Every call consumes one permit from the gate before answering.
    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn into_generator(self, convention: CallingConvention) -> Generator {
        Arc::new(self).shared_generator(convention)
    }

    /// Like `into_generator`, but the caller keeps a handle to read `calls`.
    pub fn shared_generator(self: Arc<Self>, convention: CallingConvention) -> Generator {
        let config = GenerationConfig {
            convention,
            ..GenerationConfig::default()
        };
        Generator::new(self, &config)
    }

    async fn answer(&self, key: &str) -> Reply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        self.replies.get(key).cloned().unwrap_or(Reply::Fail)
    }
}

fn key_for_prompt(prompt: &str) -> &'static str {
    if prompt.contains("travel destinations") {
        "places"
    } else if prompt.contains("nearby attractions") {
        "attractions"
    } else if prompt.contains("food recommendations") {
        "restaurants"
    } else {
        "trip_plan"
    }
}

#[async_trait]
impl GenerationService for ScriptedGenerator {
    async fn generate_object(&self, request: &GenerationRequest) -> Result<Value, GenerationError> {
        match self.answer(&request.schema_name).await {
            Reply::Json(value) => Ok(value),
            Reply::Text(text) => Ok(serde_json::from_str(&text)?),
            Reply::Fail => Err(GenerationError::Status {
                status: 503,
                body: "unavailable".to_string(),
            }),
        }
    }

    async fn generate_text(&self, prompt: &str, _model: &str) -> Result<String, GenerationError> {
        match self.answer(key_for_prompt(prompt)).await {
            Reply::Json(value) => Ok(value.to_string()),
            Reply::Text(text) => Ok(text),
            Reply::Fail => Err(GenerationError::EmptyResponse),
        }
    }
}

pub fn sample_places() -> Value {
    json!({
        "places": [
            {
                "id": "kyoto",
                "name": "Kyoto, Japan",
                "description": "Temples, gardens and tea houses.",
                "location": { "lat": 35.0116, "lng": 135.7681, "address": "Kyoto, Japan" },
                "photos": ["https://images.unsplash.com/kyoto-1", "https://images.unsplash.com/kyoto-2"],
                "rating": 4.9,
                "category": "City"
            },
            {
                "id": "nara",
                "name": "Nara, Japan",
                "description": "Ancient capital with friendly deer.",
                "location": { "lat": 34.6851, "lng": 135.8048, "address": "Nara, Japan" },
                "photos": [],
                "rating": 4.6,
                "category": "Historic"
            }
        ]
    })
}

pub fn sample_attractions() -> Value {
    json!({
        "attractions": [{
            "id": "a1",
            "name": "Fushimi Inari Shrine",
            "description": "Thousands of vermilion torii gates.",
            "distance": "4 km",
            "rating": 4.8,
            "photo": "https://images.unsplash.com/inari",
            "category": "Shrine"
        }]
    })
}

pub fn sample_restaurants() -> Value {
    json!({
        "restaurants": [{
            "id": "r1",
            "name": "Nishiki Market Stall",
            "cuisine": "Japanese",
            "description": "Street food in the kitchen of Kyoto.",
            "rating": 4.5,
            "priceRange": "$",
            "photo": "https://images.unsplash.com/nishiki",
            "distance": "1.2 km"
        }]
    })
}

pub fn sample_trip_plan() -> Value {
    json!({
        "destination": "Kyoto, Japan",
        "duration": "5 days",
        "highlights": ["Temples", "Gardens"],
        "itinerary": [
            { "day": 1, "activities": ["Kiyomizu-dera", "Gion walk"] },
            { "day": 2, "activities": ["Arashiyama bamboo grove"] }
        ],
        "tips": ["Buy a bus pass"]
    })
}

pub fn full_script() -> ScriptedGenerator {
    ScriptedGenerator::new()
        .reply("places", Reply::Json(sample_places()))
        .reply("attractions", Reply::Json(sample_attractions()))
        .reply("restaurants", Reply::Json(sample_restaurants()))
        .reply("trip_plan", Reply::Json(sample_trip_plan()))
}
