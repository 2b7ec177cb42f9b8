use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::services::{guide_service::GuideService, identity_service::IdentityProvider};
use crate::state::session_store::SessionStore;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
    active_sessions: usize,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

/*
    /health
*/
pub async fn health_check(
    guide: web::Data<GuideService>,
    identity: web::Data<IdentityProvider>,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        active_sessions: sessions.len(),
    };

    let generation_result = check_generation(&guide);
    health
        .services
        .insert("generation".to_string(), generation_result.clone());

    let identity_result = check_identity(&identity);
    health
        .services
        .insert("identity".to_string(), identity_result.clone());

    // Without a generation key every answer is fallback content, so the service is degraded
    if generation_result.status != "ok" || identity_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_generation(guide: &GuideService) -> ServiceStatus {
    let generator = guide.generator();
    if generator.is_configured() {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "Model {} ({} mode)",
                generator.model(),
                generator.convention().as_str()
            )),
        }
    } else {
        ServiceStatus {
            status: "error".to_string(),
            details: Some("GENERATION_API_KEY not configured, serving fallback content".to_string()),
        }
    }
}

fn check_identity(identity: &IdentityProvider) -> ServiceStatus {
    if identity.is_ready() {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("{} active subscriptions", identity.subscriber_count())),
        }
    } else {
        ServiceStatus {
            status: "loading".to_string(),
            details: Some("Waiting for signing secret".to_string()),
        }
    }
}
