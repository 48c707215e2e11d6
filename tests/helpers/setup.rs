use service_swap_api::Application;
use service_swap_infra::ServiceSwapContext;
use service_swap_sdk::ServiceSwapSDK;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// A client with its own cookie jar, so without the session of any other client
    pub fn new_client(&self) -> ServiceSwapSDK {
        ServiceSwapSDK::new(self.address.clone())
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, ServiceSwapSDK) {
    let mut ctx = ServiceSwapContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.secure_cookies = false; // Plain http
    ctx.config.access_token_secret = "integration-test-secret".into();

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { address };
    let sdk = app.new_client();
    (app, sdk)
}
