use once_cell::sync::Lazy;
use reqwest::{Client, Response};
use secrecy::Secret;
use std::net::SocketAddr;
use thensh::{
    configuration::{get_configuration, Settings},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let name = "test";
    let default_env_filter = "info";
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::sink);
        init_subscriber(subscriber);
    }
});

static FAILED_TO_EXECUTE_REQUEST: &str = "Failed to execute request";

pub const TEST_API_KEY: &str = "test-loops-api-key";

pub struct TestApp {
    pub address: SocketAddr,
    pub loops_server: MockServer,
    client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Lazy::force(&TRACING);

        let loops_server = MockServer::start().await;
        let config = test_configuration(&loops_server);

        let app = Application::build(config)
            .await
            .expect("Failed to build application");
        let address = app.local_addr();

        tokio::spawn(app.run_until_stopped());

        Self {
            address,
            loops_server,
            client: Client::new(),
        }
    }

    pub async fn get_health_check(&self) -> Response {
        self.client
            .get(self.url("/health_check"))
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn get_landing_page(&self) -> Response {
        self.client
            .get(self.url("/"))
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn get_landing_page_html(&self) -> String {
        self.get_landing_page()
            .await
            .text()
            .await
            .expect("Failed to read response body")
    }

    pub async fn post_signup(&self, body: &'static str) -> Response {
        self.client
            .post(self.url("/"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn post_signup_fields(&self, fields: &[(&str, &str)]) -> Response {
        let body = serde_urlencoded::to_string(fields).expect("Failed to encode form fields");

        self.client
            .post(self.url("/"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn post_signup_without_content_type(&self, body: &'static str) -> Response {
        self.client
            .post(self.url("/"))
            .body(body)
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("http://{}{endpoint}", self.address)
    }
}

pub fn test_configuration(loops_server: &MockServer) -> Settings {
    let mut config = get_configuration().expect("Failed to read configuration");
    config.application.host = "127.0.0.1".into();
    config.application.port = 0;
    config.mailing_list.base_url = loops_server.uri();
    config.mailing_list.api_key = Some(Secret::new(TEST_API_KEY.into()));
    config.mailing_list.timeout_milliseconds = 2_000;
    config
}
