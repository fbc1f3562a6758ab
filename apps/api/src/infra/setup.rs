use crate::{
    adapters::{http::app_state::AppState, persistence::JsonFilePersistence},
    infra::{config::AppConfig, error::InfraError},
    use_cases::{
        admin::AdminUseCases,
        waitlist::{WaitlistRepo, WaitlistUseCases},
    },
};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let store = Arc::new(JsonFilePersistence::new(&config.waitlist_file));
    store.init().await.map_err(InfraError::StoreInit)?;

    let waitlist_use_cases = WaitlistUseCases::new(store as Arc<dyn WaitlistRepo>);
    let admin_use_cases = AdminUseCases::new(config.admin_password.clone());

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        admin_use_cases: Arc::new(admin_use_cases),
    })
}

pub fn init_tracing(log_file: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs), only when configured and creatable
    let json_layer = log_file
        .and_then(|path| match File::create(path) {
            Ok(file) => Some(file),
            Err(err) => {
                eprintln!("cannot create log file {}: {}", path.display(), err);
                None
            }
        })
        .map(|file| {
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true)
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
