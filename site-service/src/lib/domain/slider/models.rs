use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// A home-page slider entry, ordered by `position` ascending.
#[derive(Debug, Clone, Serialize)]
pub struct Slider {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Slider {
    pub fn new(
        title: String,
        description: String,
        image_url: String,
        position: i32,
        is_active: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            image_url,
            position,
            is_active,
            created_at: Utc::now(),
        }
    }
}

/// Partial update for a slider; absent fields are left untouched.
#[derive(Debug, Default, Clone)]
pub struct SliderUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}
