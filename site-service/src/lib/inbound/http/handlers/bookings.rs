use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use super::required;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::booking::models::BookingRequest;
use crate::domain::booking::models::BookingStatus;
use crate::domain::booking::models::BookingWithService;
use crate::inbound::http::router::AppState;

pub async fn create_booking(
    State(state): State<AppState>,
    Json(body): Json<CreateBookingBody>,
) -> Result<ApiSuccess<BookingRequest>, ApiError> {
    let service_id = body
        .service_id
        .ok_or_else(|| ApiError::Validation("Field 'service_id' is required".to_string()))?;
    let name = required(body.name, "name")?;
    let phone = required(body.phone, "phone")?;
    let email = required(body.email, "email")?;
    let preferred_date = body
        .preferred_date
        .ok_or_else(|| ApiError::Validation("Field 'preferred_date' is required".to_string()))?;
    let preferred_time = required(body.preferred_time, "preferred_time")?;

    if !phone.chars().any(|c| c.is_ascii_digit()) {
        return Err(ApiError::Validation(
            "Phone number must contain at least one digit".to_string(),
        ));
    }

    let booking = BookingRequest::new(
        service_id,
        name,
        phone,
        email,
        preferred_date,
        preferred_time,
        body.notes,
    );

    state
        .bookings
        .create(booking)
        .await
        .map_err(ApiError::from)
        .map(|booking| ApiSuccess::new(StatusCode::CREATED, booking))
}

pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<BookingWithService>>, ApiError> {
    state
        .bookings
        .list_with_services()
        .await
        .map_err(ApiError::from)
        .map(|bookings| ApiSuccess::new(StatusCode::OK, bookings))
}

pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
    Json(body): Json<UpdateStatusBody>,
) -> Result<ApiSuccess<BookingRequest>, ApiError> {
    let status = required(body.status, "status")?;
    let status = status
        .parse::<BookingStatus>()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    state
        .bookings
        .update_status(booking_id, status)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Booking request not found".to_string()))
        .map(|booking| ApiSuccess::new(StatusCode::OK, booking))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingBody {
    pub service_id: Option<Uuid>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusBody {
    pub status: Option<String>,
}
