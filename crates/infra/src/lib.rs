mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, MailConfig, ReminderJobConfig};
pub use repos::{DeleteResult, IEventRepo, INotificationRepo, IUserRepo, Repos};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::{info, warn};

#[derive(Clone)]
pub struct StationContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub mailer: Arc<dyn IMailer>,
    pool: Option<PgPool>,
}

impl StationContext {
    /// Context backed by in-memory repositories and a mailer that only
    /// records what it is asked to send
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            mailer: Arc::new(InMemoryMailer::new()),
            pool: None,
        }
    }

    async fn create_postgres(connection_string: &str, config: Config) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        run_migration(&pool).await?;

        Ok(Self {
            repos: Repos::create_postgres(pool.clone()),
            mailer: create_mailer(&config),
            config,
            sys: Arc::new(RealSys {}),
            pool: Some(pool),
        })
    }

    /// Closes the connection pool, if there is one
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

fn create_mailer(config: &Config) -> Arc<dyn IMailer> {
    if !config.mail.is_smtp_configured() {
        warn!("SMTP server is not configured, emails will only be logged.");
        return Arc::new(InMemoryMailer::new());
    }
    match SmtpMailer::new(&config.mail) {
        Ok(mailer) => Arc::new(mailer),
        Err(e) => {
            warn!(
                "Unable to set up SMTP transport: {}. Emails will only be logged.",
                e
            );
            Arc::new(InMemoryMailer::new())
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<StationContext> {
    let config = Config::new();
    match std::env::var("DATABASE_URL") {
        Ok(connection_string) if !connection_string.trim().is_empty() => {
            info!("DB CHECKING CONNECTION ...");
            let ctx = StationContext::create_postgres(&connection_string, config).await?;
            info!("DB CHECKING CONNECTION ... [done]");
            Ok(ctx)
        }
        _ => {
            warn!("DATABASE_URL is not set, data is kept in memory and lost on restart.");
            Ok(StationContext {
                repos: Repos::create_inmemory(),
                mailer: create_mailer(&config),
                config,
                sys: Arc::new(RealSys {}),
                pool: None,
            })
        }
    }
}

pub async fn run_migration(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!().run(pool).await
}
