use flowerstation_domain::Tz;
use flowerstation_utils::{create_random_secret, mask_secret};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Secret code the authentication provider uses to register `User`s
    pub create_user_secret_code: String,
    /// Key used to sign and verify session tokens
    pub session_secret: String,
    /// Shared secret the external scheduler sends as a bearer token when
    /// triggering the reminder sweep. No check is done when it is unset.
    pub cron_secret: Option<String>,
    /// Timezone of the calendar days events are placed in and that the
    /// reminder sweep uses to decide what "today" is
    pub timezone: Tz,
    pub reminder_job: ReminderJobConfig,
    pub mail: MailConfig,
}

/// In-process scheduling of the reminder sweep, for deployments
/// without an external scheduler calling the cron endpoint
#[derive(Debug, Clone)]
pub struct ReminderJobConfig {
    pub enabled: bool,
    /// Local hour of the day at which the sweep runs
    pub hour: u32,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP host. Mails are only logged when this is missing
    pub host: Option<String>,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Use implicit TLS instead of STARTTLS
    pub secure: bool,
    pub from: String,
}

impl MailConfig {
    pub fn from_env() -> Self {
        let host = non_empty_env("EMAIL_SERVER_HOST");
        let user = non_empty_env("EMAIL_SERVER_USER");
        let password = non_empty_env("EMAIL_SERVER_PASSWORD");
        info!(
            "Email configuration: EMAIL_SERVER_HOST: {}, EMAIL_SERVER_USER: {}, EMAIL_SERVER_PASSWORD: {}",
            host.as_deref().unwrap_or("Not set"),
            if user.is_some() { "Set" } else { "Not set" },
            if password.is_some() { "Set (hidden)" } else { "Not set" },
        );

        Self {
            host,
            port: parse_env("EMAIL_SERVER_PORT", 587),
            user,
            password,
            secure: parse_env("EMAIL_SERVER_SECURE", false),
            from: non_empty_env("EMAIL_FROM")
                .unwrap_or_else(|| "Flower Station <noreply@flowerstation.com>".into()),
        }
    }

    pub fn is_smtp_configured(&self) -> bool {
        self.host.is_some() && self.user.is_some()
    }
}

impl Config {
    pub fn new() -> Self {
        let create_user_secret_code = match non_empty_env("CREATE_USER_SECRET_CODE") {
            Some(code) => code,
            None => {
                info!("Did not find CREATE_USER_SECRET_CODE environment variable. Going to create one.");
                let code = create_random_secret(16);
                info!(
                    "Secret code for creating users was generated and set to: {}",
                    code
                );
                code
            }
        };
        let session_secret = match non_empty_env("SESSION_SECRET") {
            Some(secret) => secret,
            None => {
                warn!("Did not find SESSION_SECRET environment variable. Session tokens will not survive a restart.");
                create_random_secret(32)
            }
        };
        let cron_secret = non_empty_env("CRON_SECRET");
        match &cron_secret {
            Some(secret) => info!("Cron endpoint is protected by secret: {}", mask_secret(secret, 3)),
            None => warn!("CRON_SECRET is not set, anyone can trigger the reminder sweep."),
        }

        let timezone = match non_empty_env("TZ_NAME") {
            Some(name) => match name.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given TZ_NAME: {} is not a valid timezone, falling back to UTC.",
                        name
                    );
                    Tz::UTC
                }
            },
            None => Tz::UTC,
        };

        let reminder_job = ReminderJobConfig {
            enabled: parse_env("REMINDER_JOB_ENABLED", false),
            hour: match parse_env("REMINDER_JOB_HOUR", 8) {
                hour if hour < 24 => hour,
                hour => {
                    warn!(
                        "The given REMINDER_JOB_HOUR: {} is not an hour of the day, falling back to 8.",
                        hour
                    );
                    8
                }
            },
        };

        Self {
            port: parse_env("PORT", 5000),
            create_user_secret_code,
            session_secret,
            cron_secret,
            timezone,
            reminder_job,
            mail: MailConfig::from_env(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match non_empty_env(key) {
        Some(val) => match val.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, val, default
                );
                default
            }
        },
        None => default,
    }
}
