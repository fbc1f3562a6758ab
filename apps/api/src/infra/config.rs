use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Single shared secret for the admin dashboard.
    pub admin_password: SecretString,
    /// Location of the persisted waitlist document.
    pub waitlist_file: PathBuf,
    /// Allowed browser origin. `None` allows any origin.
    pub cors_origin: Option<HeaderValue>,
    /// Optional file receiving JSON-formatted logs next to the console output.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_host: IpAddr = get_env_default("BIND_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST));
        let port: u16 = get_env_default("PORT", 3001);

        let admin_password: SecretString =
            SecretString::new(get_env::<String>("ADMIN_PASSWORD").into());

        let waitlist_file: PathBuf =
            PathBuf::from(get_env_default("WAITLIST_FILE", "waitlist.json".to_string()));

        let cors_origin: Option<HeaderValue> = std::env::var("CORS_ORIGIN").ok().map(|origin| {
            origin
                .parse()
                .expect("CORS_ORIGIN must be a valid header value")
        });

        let log_file: Option<PathBuf> = std::env::var("LOG_FILE").ok().map(PathBuf::from);

        Self {
            bind_addr: SocketAddr::new(bind_host, port),
            admin_password,
            waitlist_file,
            cors_origin,
            log_file,
        }
    }
}
