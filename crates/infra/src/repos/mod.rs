mod booking;
mod service;
mod shared;

pub use booking::IBookingRepo;
use booking::{InMemoryBookingRepo, MongoBookingRepo};
use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client,
};
pub use service::IServiceRepo;
use service::{InMemoryServiceRepo, MongoServiceRepo};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub services: Arc<dyn IServiceRepo>,
    pub bookings: Arc<dyn IBookingRepo>,
}

impl Repos {
    pub async fn create_mongodb(connection_string: &str, db_name: &str) -> anyhow::Result<Self> {
        let mut client_options = ClientOptions::parse(connection_string).await?;
        client_options.app_name = Some("service_swap".into());
        client_options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );
        let client = Client::with_options(client_options)?;

        // Make sure that the deployment is reachable before the server starts accepting requests
        info!("DB CHECKING CONNECTION ...");
        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        let db = client.database(db_name);
        Ok(Self {
            services: Arc::new(MongoServiceRepo::new(&db)),
            bookings: Arc::new(MongoBookingRepo::new(&db)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            services: Arc::new(InMemoryServiceRepo::new()),
            bookings: Arc::new(InMemoryBookingRepo::new()),
        }
    }
}
