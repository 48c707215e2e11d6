mod telemetry;

use service_swap_api::Application;
use service_swap_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("service_swap_server".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context()
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("{:#}", e)))?;

    let app = Application::new(context).await?;
    app.start().await
}
