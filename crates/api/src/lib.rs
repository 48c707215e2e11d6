mod booking;
mod error;
mod service;
mod session;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use error::ServiceSwapError;
use service_swap_infra::{Config, ServiceSwapContext};
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    booking::configure_routes(cfg);
    service::configure_routes(cfg);
    session::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: ServiceSwapContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(
        context: ServiceSwapContext,
    ) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        info!("Listening on port {}", port);

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(cors_policy(&ctx.config))
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                    ServiceSwapError::BadClientData(err.to_string()).into()
                }))
                .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                    ServiceSwapError::BadClientData(err.to_string()).into()
                }))
                .app_data(web::Data::new(ctx))
                .configure(configure_server_api)
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn cors_policy(config: &Config) -> Cors {
    match &config.cors_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials(),
        None => Cors::permissive(),
    }
}
