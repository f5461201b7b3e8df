use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// A gallery image record. The file bytes live in external static storage;
/// the record keeps the public URL and the storage filename.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryImage {
    pub id: Uuid,
    pub url: String,
    pub filename: String,
    pub created_at: DateTime<Utc>,
}

impl GalleryImage {
    pub fn new(url: String, filename: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            filename,
            created_at: Utc::now(),
        }
    }
}
