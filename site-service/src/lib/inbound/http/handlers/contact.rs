use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::required;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::contact::models::ContactInfo;
use crate::domain::contact::models::ContactMessage;
use crate::domain::contact::models::MessageStatus;
use crate::domain::contact::models::SocialLinks;
use crate::inbound::http::router::AppState;

pub async fn get_contact_info(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ContactInfo>, ApiError> {
    state
        .contact_info
        .get()
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Contact info has not been set".to_string()))
        .map(|info| ApiSuccess::new(StatusCode::OK, info))
}

pub async fn update_contact_info(
    State(state): State<AppState>,
    Json(body): Json<UpdateContactInfoBody>,
) -> Result<ApiSuccess<ContactInfo>, ApiError> {
    let info = ContactInfo {
        phone: required(body.phone, "phone")?,
        email: required(body.email, "email")?,
        address: required(body.address, "address")?,
        social_links: body
            .social_links
            .ok_or_else(|| ApiError::Validation("Field 'social_links' is required".to_string()))?,
    };

    state
        .contact_info
        .upsert(info)
        .await
        .map_err(ApiError::from)
        .map(|info| ApiSuccess::new(StatusCode::OK, info))
}

pub async fn create_message(
    State(state): State<AppState>,
    Json(body): Json<CreateMessageBody>,
) -> Result<ApiSuccess<ContactMessage>, ApiError> {
    let name = required(body.name, "name")?;
    let email = required(body.email, "email")?;
    let message = required(body.message, "message")?;

    state
        .contact_messages
        .create(ContactMessage::new(name, email, message))
        .await
        .map_err(ApiError::from)
        .map(|message| {
            ApiSuccess::with_message(
                StatusCode::CREATED,
                "Contact request created successfully",
                message,
            )
        })
}

pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ContactMessage>>, ApiError> {
    state
        .contact_messages
        .list()
        .await
        .map_err(ApiError::from)
        .map(|messages| ApiSuccess::new(StatusCode::OK, messages))
}

pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<Uuid>,
) -> Result<ApiSuccess<ContactMessage>, ApiError> {
    state
        .contact_messages
        .find_by_id(message_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Contact request not found".to_string()))
        .map(|message| ApiSuccess::new(StatusCode::OK, message))
}

pub async fn update_message_status(
    State(state): State<AppState>,
    Path(message_id): Path<Uuid>,
    Json(body): Json<UpdateMessageStatusBody>,
) -> Result<ApiSuccess<ContactMessage>, ApiError> {
    let status = required(body.status, "status")?;
    let status = status
        .parse::<MessageStatus>()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    state
        .contact_messages
        .update_status(message_id, status)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Contact request not found".to_string()))
        .map(|message| {
            ApiSuccess::with_message(StatusCode::OK, "Contact request updated successfully", message)
        })
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactInfoBody {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub social_links: Option<SocialLinks>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMessageBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMessageStatusBody {
    pub status: Option<String>,
}
