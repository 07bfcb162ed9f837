use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether the appointment is booked for one person or for a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentKind {
    Individual,
    Group,
}

/// A physical service location offering appointment slots. Reference data
/// owned by the backend; the flow never mutates a center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Center {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country_name: String,
}

impl Center {
    /// Directions link for the center's coordinates.
    pub fn maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.latitude, self.longitude
        )
    }
}

/// Identity resolved from a submitted identifier. Created only by a
/// successful lookup and immutable until the flow is reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub identifier: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Receipt returned by the backend once an appointment is booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub id: Uuid,
    pub qr_payload: String,
}
