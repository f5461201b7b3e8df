use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login;
use super::handlers::auth::me;
use super::handlers::auth::register;
use super::handlers::bookings::create_booking;
use super::handlers::bookings::list_bookings;
use super::handlers::bookings::update_booking_status;
use super::handlers::contact::create_message;
use super::handlers::contact::get_contact_info;
use super::handlers::contact::get_message;
use super::handlers::contact::list_messages;
use super::handlers::contact::update_contact_info;
use super::handlers::contact::update_message_status;
use super::handlers::gallery::add_image;
use super::handlers::gallery::delete_image;
use super::handlers::gallery::list_images;
use super::handlers::reviews::create_review;
use super::handlers::reviews::list_reviews;
use super::handlers::reviews::my_review;
use super::handlers::services::create_service;
use super::handlers::services::delete_service;
use super::handlers::services::list_services;
use super::handlers::services::update_service;
use super::handlers::sliders::create_slider;
use super::handlers::sliders::delete_slider;
use super::handlers::sliders::list_sliders;
use super::handlers::sliders::update_slider;
use super::middleware::authenticate;
use super::middleware::require_admin;
use crate::domain::booking::ports::BookingRepository;
use crate::domain::catalog::ports::ServiceRepository;
use crate::domain::contact::ports::ContactInfoRepository;
use crate::domain::contact::ports::ContactMessageRepository;
use crate::domain::gallery::ports::GalleryRepository;
use crate::domain::review::service::ReviewService;
use crate::domain::slider::ports::SliderRepository;
use crate::domain::user::service::AuthService;

/// Unified application state shared by every handler.
///
/// Repositories are held behind their ports so the HTTP layer never names a
/// concrete store.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub review_service: Arc<ReviewService>,
    pub authenticator: Arc<Authenticator>,
    pub services: Arc<dyn ServiceRepository>,
    pub sliders: Arc<dyn SliderRepository>,
    pub gallery: Arc<dyn GalleryRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub contact_info: Arc<dyn ContactInfoRepository>,
    pub contact_messages: Arc<dyn ContactMessageRepository>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/services", get(list_services))
        .route("/api/sliders", get(list_sliders))
        .route("/api/gallery", get(list_images))
        .route("/api/reviews", get(list_reviews))
        .route("/api/contact-info", get(get_contact_info))
        .route("/api/requests", post(create_booking))
        .route("/api/contact-requests", post(create_message));

    let authenticated_routes = Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/reviews", post(create_review))
        .route("/api/reviews/me", get(my_review))
        .route_layer(middleware::from_fn_with_state(
            state.authenticator.clone(),
            authenticate,
        ));

    // Admin routes pass the authenticator first, then the role gate;
    // route_layer ordering makes `authenticate` the outer layer.
    let admin_routes = Router::new()
        .route("/api/services", post(create_service))
        .route("/api/services/:service_id", put(update_service))
        .route("/api/services/:service_id", delete(delete_service))
        .route("/api/sliders", post(create_slider))
        .route("/api/sliders/:slider_id", put(update_slider))
        .route("/api/sliders/:slider_id", delete(delete_slider))
        .route("/api/gallery", post(add_image))
        .route("/api/gallery/:image_id", delete(delete_image))
        .route("/api/contact-info", put(update_contact_info))
        .route("/api/requests", get(list_bookings))
        .route("/api/requests/:booking_id/status", patch(update_booking_status))
        .route("/api/contact-requests", get(list_messages))
        .route("/api/contact-requests/:message_id", get(get_message))
        .route(
            "/api/contact-requests/:message_id/status",
            patch(update_message_status),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(
            state.authenticator.clone(),
            authenticate,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
