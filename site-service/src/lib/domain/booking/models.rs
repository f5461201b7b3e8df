use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// A customer booking request for a catalog service.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest {
    pub id: Uuid,
    pub service_id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub preferred_date: NaiveDate,
    pub preferred_time: String,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl BookingRequest {
    /// Assemble a new pending booking request.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        service_id: Uuid,
        name: String,
        phone: String,
        email: String,
        preferred_date: NaiveDate,
        preferred_time: String,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            service_id,
            name,
            phone,
            email,
            preferred_date,
            preferred_time,
            notes,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

/// Lifecycle status of a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown status: {0}")]
pub struct UnknownStatus(pub String);

/// A booking request joined with the booked service's name, for the admin
/// listing. The service may have been deleted since the booking was made.
#[derive(Debug, Clone, Serialize)]
pub struct BookingWithService {
    #[serde(flatten)]
    pub booking: BookingRequest,
    pub service_name: Option<String>,
}
