//! Application builder — wires repositories, services, and state into
//! an Axum app and runs it.

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;
use tokio::sync::watch;

use bunkhub_core::config::AppConfig;
use bunkhub_core::error::AppError;
use bunkhub_database::repositories::{
    allocation, bed, booking, building, event, notification, room, user,
};
use bunkhub_service::allocation::{AllocationService, AvailabilityService};
use bunkhub_service::booking::BookingService;
use bunkhub_service::event::EventService;
use bunkhub_service::inventory::InventoryService;
use bunkhub_service::notification::{NotificationRules, NotificationService};
use bunkhub_service::report::ReportService;
use bunkhub_service::user::UserService;

use crate::router::build_router;
use crate::state::AppState;

/// Interval between notification retention sweeps.
const MAINTENANCE_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Runs the BunkHub server with the given configuration and database
/// pool. Returns once the server has shut down gracefully.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting BunkHub server...");

    // Repositories
    let user_repo = Arc::new(user::UserRepository::new(db_pool.clone()));
    let event_repo = Arc::new(event::EventRepository::new(db_pool.clone()));
    let building_repo = Arc::new(building::BuildingRepository::new(db_pool.clone()));
    let room_repo = Arc::new(room::RoomRepository::new(db_pool.clone()));
    let bed_repo = Arc::new(bed::BedRepository::new(db_pool.clone()));
    let booking_repo = Arc::new(booking::BookingRepository::new(db_pool.clone()));
    let allocation_repo = Arc::new(allocation::AllocationRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(notification::NotificationRepository::new(db_pool.clone()));

    // Services
    let notification_rules = Arc::new(NotificationRules::new(Arc::clone(&user_repo)));
    let notification_service = Arc::new(NotificationService::new(
        Arc::clone(&notification_repo),
        notification_rules,
        config.notifications.clone(),
    ));
    let event_service = Arc::new(EventService::new(Arc::clone(&event_repo)));
    let inventory_service = Arc::new(InventoryService::new(
        Arc::clone(&event_repo),
        Arc::clone(&building_repo),
        Arc::clone(&room_repo),
        Arc::clone(&bed_repo),
        Arc::clone(&allocation_repo),
    ));
    let booking_service = Arc::new(BookingService::new(
        Arc::clone(&booking_repo),
        Arc::clone(&allocation_repo),
        Arc::clone(&event_repo),
        Arc::clone(&notification_service),
    ));
    let availability_service = Arc::new(AvailabilityService::new(
        Arc::clone(&building_repo),
        Arc::clone(&room_repo),
        Arc::clone(&allocation_repo),
    ));
    let allocation_service = Arc::new(AllocationService::new(
        Arc::clone(&booking_repo),
        Arc::clone(&allocation_repo),
        Arc::clone(&notification_service),
    ));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));
    let report_service = Arc::new(ReportService::new(
        Arc::clone(&event_repo),
        Arc::clone(&building_repo),
        Arc::clone(&room_repo),
        Arc::clone(&booking_repo),
        Arc::clone(&allocation_repo),
    ));

    // Shutdown channel and retention sweeper
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = Arc::clone(&notification_service);
    let mut sweeper_shutdown = shutdown_rx.clone();
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(MAINTENANCE_INTERVAL);
        loop {
            tokio::select! {
                _ = tick.tick() => {
                    if let Err(e) = sweeper.run_maintenance().await {
                        tracing::warn!(error = %e, "Notification maintenance failed");
                    }
                }
                _ = sweeper_shutdown.changed() => break,
            }
        }
    });

    let app_state = AppState {
        config: Arc::new(config.clone()),
        db_pool,
        event_service,
        inventory_service,
        booking_service,
        availability_service,
        allocation_service,
        notification_service,
        report_service,
        user_service,
    };

    let app = build_router(app_state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("BunkHub server listening on {addr}");

    let mut serve_shutdown = shutdown_rx.clone();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = serve_shutdown.changed().await;
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            let _ = shutdown_tx.send(true);
            return match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(AppError::internal(format!("Server error: {e}"))),
                Err(e) => Err(AppError::internal(format!("Server task failed: {e}"))),
            };
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received, draining connections");
            let _ = shutdown_tx.send(true);
        }
    }

    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    match tokio::time::timeout(grace, server).await {
        Ok(Ok(Ok(()))) => {}
        Ok(Ok(Err(e))) => return Err(AppError::internal(format!("Server error: {e}"))),
        Ok(Err(e)) => return Err(AppError::internal(format!("Server task failed: {e}"))),
        Err(_) => tracing::warn!(
            grace_seconds = config.server.shutdown_grace_seconds,
            "Graceful shutdown timed out, aborting remaining connections"
        ),
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
