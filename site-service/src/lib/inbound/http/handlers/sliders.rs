use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::required;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::slider::models::Slider;
use crate::domain::slider::models::SliderUpdate;
use crate::inbound::http::router::AppState;

pub async fn list_sliders(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<Slider>>, ApiError> {
    state
        .sliders
        .list()
        .await
        .map_err(ApiError::from)
        .map(|sliders| ApiSuccess::new(StatusCode::OK, sliders))
}

pub async fn create_slider(
    State(state): State<AppState>,
    Json(body): Json<CreateSliderBody>,
) -> Result<ApiSuccess<Slider>, ApiError> {
    let title = required(body.title, "title")?;
    let description = required(body.description, "description")?;
    let image_url = required(body.image_url, "image_url")?;

    let slider = Slider::new(
        title,
        description,
        image_url,
        body.position.unwrap_or(0),
        body.is_active.unwrap_or(true),
    );

    state
        .sliders
        .create(slider)
        .await
        .map_err(ApiError::from)
        .map(|slider| ApiSuccess::with_message(StatusCode::CREATED, "Slider created successfully", slider))
}

pub async fn update_slider(
    State(state): State<AppState>,
    Path(slider_id): Path<Uuid>,
    Json(body): Json<UpdateSliderBody>,
) -> Result<ApiSuccess<Slider>, ApiError> {
    let update = SliderUpdate {
        title: body.title,
        description: body.description,
        image_url: body.image_url,
        position: body.position,
        is_active: body.is_active,
    };

    state
        .sliders
        .update(slider_id, update)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Slider not found".to_string()))
        .map(|slider| ApiSuccess::with_message(StatusCode::OK, "Slider updated successfully", slider))
}

pub async fn delete_slider(
    State(state): State<AppState>,
    Path(slider_id): Path<Uuid>,
) -> Result<ApiSuccess<()>, ApiError> {
    let deleted = state
        .sliders
        .delete(slider_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("Slider not found".to_string()));
    }

    Ok(ApiSuccess::message_only(
        StatusCode::OK,
        "Slider deleted successfully",
    ))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSliderBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSliderBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}
