use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Database
    pub database_url: String,

    // HTTP server
    pub bind_addr: String,

    // Digest schedule (cron with seconds field, UTC)
    pub digest_cron: String,

    // Outbound mail
    pub mail_api_url: String,
    pub mail_api_key: String,
    pub mail_from: String,
    pub digest_recipient: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL").context("DATABASE_URL not set")?,

            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),

            // Daily at 06:00 UTC
            digest_cron: std::env::var("DIGEST_CRON")
                .unwrap_or_else(|_| "0 0 6 * * *".to_string()),

            mail_api_url: std::env::var("MAIL_API_URL")
                .unwrap_or_else(|_| "https://api.sendgrid.com/v3/mail/send".to_string()),
            mail_api_key: std::env::var("MAIL_API_KEY").context("MAIL_API_KEY not set")?,
            mail_from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| "noreply@histai.org".to_string()),
            digest_recipient: std::env::var("DIGEST_RECIPIENT")
                .context("DIGEST_RECIPIENT not set")?,
        })
    }
}
