use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// A service the business offers (catalog entry).
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub unit: Unit,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    /// Assemble a new active catalog entry with a fresh id and timestamps.
    pub fn new(
        name: String,
        description: String,
        price: f64,
        unit: Unit,
        image_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            price,
            unit,
            image_url,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Pricing unit for a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "m2")]
    SquareMeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "pcs")]
    Piece,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::SquareMeter => "m2",
            Unit::Meter => "m",
            Unit::Piece => "pcs",
        }
    }
}

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m2" => Ok(Unit::SquareMeter),
            "m" => Ok(Unit::Meter),
            "pcs" => Ok(Unit::Piece),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown unit: {0} (expected one of: m2, m, pcs)")]
pub struct UnknownUnit(pub String);

/// Partial update for a catalog entry; absent fields are left untouched.
#[derive(Debug, Default, Clone)]
pub struct ServiceUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<Unit>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}
