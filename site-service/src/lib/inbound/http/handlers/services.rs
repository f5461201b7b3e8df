use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::required;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::catalog::models::Service;
use crate::domain::catalog::models::ServiceUpdate;
use crate::domain::catalog::models::Unit;
use crate::inbound::http::router::AppState;

pub async fn list_services(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<Service>>, ApiError> {
    state
        .services
        .list_active()
        .await
        .map_err(ApiError::from)
        .map(|services| ApiSuccess::new(StatusCode::OK, services))
}

pub async fn create_service(
    State(state): State<AppState>,
    Json(body): Json<CreateServiceBody>,
) -> Result<ApiSuccess<Service>, ApiError> {
    let name = required(body.name, "name")?;
    let description = required(body.description, "description")?;
    let unit = required(body.unit, "unit")?;

    let unit = unit
        .parse::<Unit>()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let price = body
        .price
        .ok_or_else(|| ApiError::Validation("Field 'price' is required".to_string()))?;
    let price = validate_price(price)?;

    let service = Service::new(name, description, price, unit, body.image_url);

    state
        .services
        .create(service)
        .await
        .map_err(ApiError::from)
        .map(|service| ApiSuccess::new(StatusCode::CREATED, service))
}

pub async fn update_service(
    State(state): State<AppState>,
    Path(service_id): Path<Uuid>,
    Json(body): Json<UpdateServiceBody>,
) -> Result<ApiSuccess<Service>, ApiError> {
    let unit = body
        .unit
        .map(|u| u.parse::<Unit>())
        .transpose()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let price = body.price.map(validate_price).transpose()?;

    let update = ServiceUpdate {
        name: body.name,
        description: body.description,
        price,
        unit,
        image_url: body.image_url,
        is_active: body.is_active,
    };

    state
        .services
        .update(service_id, update)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Service not found".to_string()))
        .map(|service| ApiSuccess::new(StatusCode::OK, service))
}

pub async fn delete_service(
    State(state): State<AppState>,
    Path(service_id): Path<Uuid>,
) -> Result<ApiSuccess<()>, ApiError> {
    let deleted = state
        .services
        .delete(service_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("Service not found".to_string()));
    }

    Ok(ApiSuccess::message_only(
        StatusCode::OK,
        "Service deleted successfully",
    ))
}

fn validate_price(price: f64) -> Result<f64, ApiError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(ApiError::Validation(
            "Price must be a non-negative number".to_string(),
        ))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateServiceBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateServiceBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}
