//! Command-line entry point: loads one page of tickets for the location query
//! given as the first argument (e.g. `"page=2&sort=title,desc"`) and logs it.

use std::env;

use dotenvy::dotenv;

use ticket_tracker::list::FetchOutcome;
use ticket_tracker::models::config::ClientConfig;
use ticket_tracker::notifications::{AlertLevel, alert_level_to_str};
use ticket_tracker::repository::rest::RestRepository;
use ticket_tracker::services::list::mount_list;
use ticket_tracker::store::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match ClientConfig::load("config", &app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let repo = match RestRepository::new(&config) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Failed to build the REST client: {err}");
            std::process::exit(1);
        }
    };

    let location = env::args().nth(1).unwrap_or_default();
    let mut state = AppState::from_config(&config);

    log::info!("Loading tickets from {}", repo.base_url());
    let outcome = mount_list(
        &repo,
        &mut state.tickets,
        &location,
        &mut state.notifications,
    )
    .await;

    if let FetchOutcome::Applied = outcome {
        let control = state.tickets.pagination_control();
        log::info!(
            "Showing {}-{} of {} tickets (page {} of {}) at ?{}",
            control.first_item,
            control.last_item,
            control.total_items,
            control.active_page,
            control.last_page(),
            state.tickets.location()
        );
        for ticket in state.tickets.entities() {
            log::info!(
                "#{} [{}] {} ({})",
                ticket.id,
                ticket.status.map(|s| s.as_str()).unwrap_or("-"),
                ticket.title,
                ticket
                    .priority
                    .as_ref()
                    .map(|p| p.name.as_str())
                    .unwrap_or("no priority")
            );
        }
    }

    for notification in state.notifications.drain() {
        let class = alert_level_to_str(&notification.level);
        match notification.level {
            AlertLevel::Error => log::error!("[{class}] {}", notification.message),
            AlertLevel::Warning => log::warn!("[{class}] {}", notification.message),
            AlertLevel::Success | AlertLevel::Info => {
                log::info!("[{class}] {}", notification.message)
            }
        }
    }

    if matches!(outcome, FetchOutcome::Failed(_)) {
        std::process::exit(1);
    }
}
