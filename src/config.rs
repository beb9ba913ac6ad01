use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";
pub const DEFAULT_MAIL_FROM: &str = "noreply@poehali.dev";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub port: u16,
    pub relay_url: String,
    pub mail_timeout: Duration,
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub mail_from: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let mail_timeout = env::var("MAIL_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        Self {
            data_path: resolve_data_path(),
            port,
            relay_url: env::var("MAIL_RELAY_URL")
                .unwrap_or_else(|_| local_relay_url(port)),
            mail_timeout,
            resend_api_key: env::var("RESEND_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            resend_api_url: env::var("RESEND_API_URL")
                .unwrap_or_else(|_| DEFAULT_RESEND_API_URL.to_string()),
            mail_from: env::var("MAIL_FROM").unwrap_or_else(|_| DEFAULT_MAIL_FROM.to_string()),
        }
    }
}

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/state.json")
}

pub fn local_relay_url(port: u16) -> String {
    format!("http://127.0.0.1:{port}/api/relay/send-email")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_relay_points_at_own_endpoint() {
        assert_eq!(
            local_relay_url(9000),
            "http://127.0.0.1:9000/api/relay/send-email"
        );
    }
}
