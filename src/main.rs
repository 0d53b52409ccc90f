use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use marketreach_geo::config::{RepositoryBackend, Settings};
use marketreach_geo::routes::{self, AppState};
use marketreach_geo::services::{
    CachedCustomerRepository, CampaignRepository, CustomerRepository, InMemoryRepository, PostgresRepository,
    TargetingLocationRepository,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging; LOG_LEVEL / LOG_FORMAT win over the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting MarketReach geo service...");
    info!("Configuration loaded (backend: {:?})", settings.repository.backend);

    let (customers, locations, campaigns): (
        Arc<dyn CustomerRepository>,
        Arc<dyn TargetingLocationRepository>,
        Arc<dyn CampaignRepository>,
    ) = match settings.repository.backend {
            RepositoryBackend::Postgres => {
                let postgres = match PostgresRepository::from_settings(&settings.database).await {
                    Ok(repo) => Arc::new(repo),
                    Err(e) => {
                        error!("Failed to connect to PostgreSQL: {}", e);
                        return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
                    }
                };
                info!("PostgreSQL repository initialized");
                (
                    postgres.clone() as Arc<dyn CustomerRepository>,
                    postgres.clone() as Arc<dyn TargetingLocationRepository>,
                    postgres as Arc<dyn CampaignRepository>,
                )
            }
            RepositoryBackend::Memory => {
                let memory = Arc::new(InMemoryRepository::with_sample_data());
                info!("In-memory repository initialized ({} customers)", memory.customer_count());
                (
                    memory.clone() as Arc<dyn CustomerRepository>,
                    memory.clone() as Arc<dyn TargetingLocationRepository>,
                    memory as Arc<dyn CampaignRepository>,
                )
            }
        };

    // Optional snapshot cache in front of the customer store
    let customers: Arc<dyn CustomerRepository> = match settings.cache.ttl_secs {
        Some(ttl) if ttl > 0 => {
            let max_entries = settings.cache.max_entries.unwrap_or(1000);
            info!("Snapshot cache enabled (entries: {}, TTL: {}s)", max_entries, ttl);
            Arc::new(CachedCustomerRepository::new(customers, max_entries, Duration::from_secs(ttl)))
        }
        _ => customers,
    };

    // Build application state
    let app_state = AppState {
        customers,
        locations,
        campaigns,
        query: settings.query,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
