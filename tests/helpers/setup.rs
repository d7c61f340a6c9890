use flowerstation_api::Application;
use flowerstation_domain::Tz;
use flowerstation_infra::{InMemoryMailer, StaticTimeSys, StationContext};
use flowerstation_sdk::StationSDK;
use std::sync::Arc;

pub const CRON_SECRET: &str = "cron-secret";
pub const CREATE_USER_SECRET: &str = "create-user-secret";

pub struct TestApp {
    pub ctx: StationContext,
    pub mailer: Arc<InMemoryMailer>,
    pub address: String,
}

impl TestApp {
    /// SDK for the authentication provider
    pub fn admin(&self) -> StationSDK {
        StationSDK::with_api_key(self.address.clone(), CREATE_USER_SECRET)
    }

    /// SDK for the external scheduler calling the cron endpoint
    pub fn cron(&self) -> StationSDK {
        StationSDK::with_bearer_token(self.address.clone(), CRON_SECRET)
    }

    /// Registers a user and returns an SDK acting with their session
    pub async fn login(&self, name: &str, email: &str) -> (flowerstation_sdk::User, StationSDK) {
        let res = self
            .admin()
            .user
            .create(flowerstation_sdk::CreateUserInput {
                name: name.into(),
                email: email.into(),
                password_hash: None,
            })
            .await
            .expect("Expected to create user");
        let sdk = StationSDK::with_bearer_token(self.address.clone(), res.token);
        (res.user, sdk)
    }
}

// Launch the application as a background task with its clock frozen at `now`
pub async fn spawn_app_at(now: i64) -> (TestApp, StationSDK) {
    let mut ctx = StationContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.cron_secret = Some(CRON_SECRET.into());
    ctx.config.create_user_secret_code = CREATE_USER_SECRET.into();
    ctx.config.timezone = Tz::UTC;
    ctx.config.reminder_job.enabled = false;
    ctx.sys = Arc::new(StaticTimeSys(now));
    let mailer = Arc::new(InMemoryMailer::new());
    ctx.mailer = mailer.clone();

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = StationSDK::new(address.clone());
    let app = TestApp {
        ctx,
        mailer,
        address,
    };
    (app, sdk)
}

pub async fn spawn_app() -> (TestApp, StationSDK) {
    spawn_app_at(chrono::Utc::now().timestamp_millis()).await
}
