use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fleet_requisition::config::Config;
use fleet_requisition::constants::Constants;
use fleet_requisition::fleet::demo_fleet;
use fleet_requisition::session::FleetSession;
use fleet_requisition::traits::{DeniedNotifier, LogNotifier, Notifier, SystemClock};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting fleet requisition session");

    if config.notifications_enabled {
        run_session(&config, LogNotifier).await
    } else {
        run_session(&config, DeniedNotifier).await
    }
}

async fn run_session<N: Notifier>(config: &Config, notifier: N) -> Result<()> {
    let fleet = if config.seed_demo_data {
        demo_fleet()
    } else {
        Vec::new()
    };
    let mut session = FleetSession::new(fleet, notifier, Arc::new(SystemClock), config.timezone);

    if config.seed_demo_data {
        session.seed_requests()?;
    }

    info!("Session date: {}", session.today());

    let overview = session.overview();
    info!(
        "Fleet: {} units, {} free, {} busy, {} in maintenance ({}% utilized, {:?})",
        overview.total_units,
        overview.available_units,
        overview.in_use_units,
        overview.maintenance_units,
        overview.utilization_rate,
        overview.utilization_band()
    );

    for availability in session.availability_by_type() {
        info!(
            "{}: {}/{} free, {}% utilized",
            availability.type_name,
            availability.available_units,
            availability.total_units,
            availability.utilization_rate
        );
    }

    for review in session.review_pending()? {
        match review.status_message() {
            Some(message) => info!(
                "[{}] {} x{} ({}): {}",
                review.request.priority.display_name(),
                review.request.equipment_name,
                review.request.quantity,
                review.request.supervisor_name,
                message
            ),
            None => warn!(
                "[{}] {} x{} ({}): equipment type is not tracked",
                review.request.priority.display_name(),
                review.request.equipment_name,
                review.request.quantity,
                review.request.supervisor_name
            ),
        }
    }

    let summary = session.board().daily_summary();
    info!(
        "Allocation summary: {} pending, {} approved, {} partial, {} rejected",
        summary.pending, summary.approved, summary.partially_approved, summary.rejected
    );

    let pending_stakeholder = session
        .stakeholders()
        .filtered(Constants::STATUS_PENDING)
        .len();
    info!("Stakeholder requests awaiting a decision: {}", pending_stakeholder);

    info!("Session finished");
    Ok(())
}
