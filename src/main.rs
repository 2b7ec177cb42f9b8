use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};

use travel_guide_api::{
    config::AppConfig,
    routes,
    services::{
        generation_service::{GenerationService, Generator, OpenAiGenerationService},
        guide_service::GuideService,
        identity_service::IdentityProvider,
    },
    state::session_store::{evict_idle_loop, SessionStore},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Application starting...");

    let config = AppConfig::from_env();

    let generation_service = OpenAiGenerationService::new(&config.generation)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    if !generation_service.is_configured() {
        warn!("GENERATION_API_KEY not set; every request will be answered with fallback content");
    }
    let generation_service: Arc<dyn GenerationService> = Arc::new(generation_service);
    let generator = Generator::new(generation_service, &config.generation);
    info!(
        "Generation model {} ({} mode)",
        generator.model(),
        generator.convention().as_str()
    );

    let guide = web::Data::new(GuideService::new(generator));
    let sessions = web::Data::new(SessionStore::new());
    let identity = web::Data::new(IdentityProvider::pending());

    // The page shows its loading screen until the secret is in place
    {
        let identity = identity.clone();
        let source = config.identity_secret.clone();
        tokio::spawn(async move {
            if let Err(err) = identity.load_secret(&source).await {
                error!("Failed to load identity secret: {}", err);
            }
        });
    }

    tokio::spawn(evict_idle_loop(
        Arc::downgrade(&sessions.clone().into_inner()),
        config.session_idle,
    ));

    info!("Attempting to bind to {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(guide.clone())
            .app_data(sessions.clone())
            .app_data(identity.clone())
            .configure(routes::configure)
    })
    .bind((config.host, config.port))?
    .run()
    .await
}
