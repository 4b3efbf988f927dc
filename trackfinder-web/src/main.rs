//! trackfinder web - track details pages for the iTunes catalog

use tracing::{error, info};
use trackfinder_web::config::{startup_log_level, WebConfig};
use trackfinder_web::App;

fn main() {
    let config = WebConfig::from_env();

    // Only fails when a global subscriber is already installed, which then
    // receives everything below.
    let _ = dioxus::logger::init(startup_log_level(&config));

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };
    info!(
        "Starting trackfinder (catalog: {}, country: {})",
        config.api_base_url, config.country
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}
