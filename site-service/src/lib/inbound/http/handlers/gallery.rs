use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::required;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::gallery::models::GalleryImage;
use crate::inbound::http::router::AppState;

pub async fn list_images(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<GalleryImage>>, ApiError> {
    state
        .gallery
        .list()
        .await
        .map_err(ApiError::from)
        .map(|images| ApiSuccess::new(StatusCode::OK, images))
}

pub async fn add_image(
    State(state): State<AppState>,
    Json(body): Json<AddImageBody>,
) -> Result<ApiSuccess<GalleryImage>, ApiError> {
    let url = required(body.url, "url")?;
    let filename = required(body.filename, "filename")?;

    state
        .gallery
        .create(GalleryImage::new(url, filename))
        .await
        .map_err(ApiError::from)
        .map(|image| ApiSuccess::new(StatusCode::CREATED, image))
}

pub async fn delete_image(
    State(state): State<AppState>,
    Path(image_id): Path<Uuid>,
) -> Result<ApiSuccess<()>, ApiError> {
    let deleted = state
        .gallery
        .delete(image_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::NotFound("Image not found".to_string()));
    }

    Ok(ApiSuccess::message_only(StatusCode::OK, "Image deleted"))
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddImageBody {
    pub url: Option<String>,
    pub filename: Option<String>,
}
