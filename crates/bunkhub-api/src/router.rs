//! Route definitions for the BunkHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(event_routes())
        .merge(building_routes())
        .merge(room_routes())
        .merge(bed_routes())
        .merge(booking_routes())
        .merge(availability_routes())
        .merge(notification_routes())
        .merge(user_routes())
        .merge(report_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Event CRUD
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(handlers::event::list_events))
        .route("/events", post(handlers::event::create_event))
        .route("/events/{id}", get(handlers::event::get_event))
        .route("/events/{id}", put(handlers::event::update_event))
        .route("/events/{id}", delete(handlers::event::delete_event))
}

/// Building CRUD and structure view
fn building_routes() -> Router<AppState> {
    Router::new()
        .route("/buildings", get(handlers::building::list_buildings))
        .route("/buildings", post(handlers::building::create_building))
        .route("/buildings/{id}", get(handlers::building::get_building))
        .route("/buildings/{id}", put(handlers::building::update_building))
        .route(
            "/buildings/{id}",
            delete(handlers::building::delete_building),
        )
        .route(
            "/buildings/{id}/structure",
            get(handlers::building::get_structure),
        )
}

/// Room CRUD, occupancy, and available beds
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(handlers::room::list_rooms))
        .route("/rooms", post(handlers::room::create_room))
        .route("/rooms/{id}", get(handlers::room::get_room))
        .route("/rooms/{id}", put(handlers::room::update_room))
        .route("/rooms/{id}", delete(handlers::room::delete_room))
        .route("/rooms/{id}/occupancy", get(handlers::room::room_occupancy))
        .route(
            "/rooms/{id}/available-beds",
            get(handlers::room::available_beds),
        )
}

/// Bed CRUD
fn bed_routes() -> Router<AppState> {
    Router::new()
        .route("/beds", post(handlers::bed::create_bed))
        .route("/beds/{id}", get(handlers::bed::get_bed))
        .route("/beds/{id}", put(handlers::bed::update_bed))
        .route("/beds/{id}", delete(handlers::bed::delete_bed))
}

/// Booking workflow and allocations
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(handlers::booking::list_bookings))
        .route("/bookings", post(handlers::booking::create_booking))
        .route("/bookings/{id}", get(handlers::booking::get_booking))
        .route("/bookings/{id}", put(handlers::booking::update_booking))
        .route(
            "/bookings/{id}/status",
            put(handlers::booking::change_status),
        )
        .route("/bookings/{id}/people", get(handlers::booking::list_people))
        .route(
            "/bookings/{id}/allocations",
            get(handlers::booking::get_allocations),
        )
        .route(
            "/bookings/{id}/allocations",
            put(handlers::booking::save_allocations),
        )
}

/// Cross-building availability
fn availability_routes() -> Router<AppState> {
    Router::new().route(
        "/availability/buildings",
        get(handlers::availability::eligible_buildings),
    )
}

/// Notification endpoints
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{id}",
            delete(handlers::notification::dismiss),
        )
}

/// User directory
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users", post(handlers::user::create_user))
        .route("/users/{id}", get(handlers::user::get_user))
}

/// Report endpoints
fn report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reports/occupancy",
            get(handlers::report::occupancy_report),
        )
        .route("/reports/bookings", get(handlers::report::bookings_report))
}

/// Health check endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
