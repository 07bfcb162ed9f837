use std::time::Duration;

use time::Date;
use tracing::debug;
use uuid::Uuid;

use crate::models::{Center, Confirmation, UserProfile};
use crate::schedule;

use super::{BackendError, BookingBackend, ConfirmationRequest};

/// Canned stand-in for the booking service. Lookup and confirmation take as
/// long as the real calls are expected to; the catalog answers immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockBackend;

pub const LOOKUP_DELAY: Duration = Duration::from_millis(800);
pub const CONFIRM_DELAY: Duration = Duration::from_millis(1500);

fn seed_centers() -> Vec<Center> {
    vec![
        Center {
            id: "1".into(),
            name: "Centro Madrid".into(),
            address: "Calle Gran Vía 28, Madrid, España".into(),
            phone: "+34 91 123 4567".into(),
            latitude: 40.4168,
            longitude: -3.7038,
            country_name: "España".into(),
        },
        Center {
            id: "2".into(),
            name: "Centro Santo Domingo".into(),
            address: "Av. Winston Churchill, Santo Domingo, RD".into(),
            phone: "+1 809 555 1234".into(),
            latitude: 18.4861,
            longitude: -69.9312,
            country_name: "República Dominicana".into(),
        },
        Center {
            id: "3".into(),
            name: "Centro Nueva York".into(),
            address: "123 Broadway, New York, NY".into(),
            phone: "+1 212 555 7890".into(),
            latitude: 40.7128,
            longitude: -74.0060,
            country_name: "Estados Unidos".into(),
        },
    ]
}

impl BookingBackend for MockBackend {
    async fn lookup_identity(&self, identifier: &str) -> Result<UserProfile, BackendError> {
        debug!(identifier, "mock identity lookup");
        tokio::time::sleep(LOOKUP_DELAY).await;
        Ok(UserProfile {
            id: "1".into(),
            identifier: identifier.to_string(),
            first_name: "Juan".into(),
            last_name: "Pérez".into(),
            email: "juan.perez@email.com".into(),
            phone: "+1 809 555 0000".into(),
        })
    }

    async fn list_centers(&self) -> Result<Vec<Center>, BackendError> {
        Ok(seed_centers())
    }

    async fn available_dates(
        &self,
        _center_id: &str,
        today: Date,
    ) -> Result<Vec<Date>, BackendError> {
        Ok(schedule::available_dates(today, schedule::LOOKAHEAD_DAYS))
    }

    async fn available_times(
        &self,
        _center_id: &str,
        _date: Date,
    ) -> Result<Vec<String>, BackendError> {
        Ok(schedule::available_times()
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    async fn confirm_appointment(
        &self,
        request: &ConfirmationRequest,
    ) -> Result<Confirmation, BackendError> {
        debug!(user = request.user_id, center = request.center_id, "mock confirmation");
        tokio::time::sleep(CONFIRM_DELAY).await;
        let id = Uuid::new_v4();
        Ok(Confirmation {
            id,
            qr_payload: format!(
                "CITA:{id}:{}:{}:{}T{}",
                request.user_id, request.center_id, request.date, request.time
            ),
        })
    }
}
