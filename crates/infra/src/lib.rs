mod config;
mod repos;
mod system;

pub use config::{mongodb_connection_string, Config};
pub use repos::{IBookingRepo, IServiceRepo, Repos};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::{info, warn};

/// Name of the database holding the `services` and `booking` collections
pub const DATABASE_NAME: &str = "serviceSwapCenter";

#[derive(Clone)]
pub struct ServiceSwapContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

struct ContextParams {
    pub mongodb_connection_string: String,
}

impl ServiceSwapContext {
    /// Context without any external infrastructure. Everything is stored in memory.
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }

    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = Repos::create_mongodb(&params.mongodb_connection_string, DATABASE_NAME).await?;
        Ok(Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        })
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<ServiceSwapContext> {
    if let Err(e) = dotenvy::dotenv() {
        info!("No .env file loaded: {}", e);
    }

    // cargo run inmemory
    let inmemory_arg_set = std::env::args().nth(1).as_deref() == Some("inmemory");
    if inmemory_arg_set {
        info!("Inmemory argument provided. Going to use inmemory infra.");
        return Ok(ServiceSwapContext::create_inmemory());
    }

    match mongodb_connection_string() {
        Some(mongodb_connection_string) => {
            info!("Database credentials were provided. Going to use mongodb.");
            ServiceSwapContext::create(ContextParams {
                mongodb_connection_string,
            })
            .await
        }
        None => {
            warn!("Neither MONGODB_URI nor DB_USER and DB_PASS env vars were provided. Going to use inmemory infra.");
            Ok(ServiceSwapContext::create_inmemory())
        }
    }
}
