//! Best-effort confirmation notices.
//!
//! A notifier failure never undoes or fails an admission; the booking service
//! logs it and moves on.

use thiserror::Error;
use tracing::info;

use crate::clock::minutes_to_time;
use crate::model::Reservation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("notification failed: {0}")]
pub struct NotifyError(pub String);

pub trait Notifier: Send + Sync {
    fn notify(&self, reservation: &Reservation) -> Result<(), NotifyError>;
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, reservation: &Reservation) -> Result<(), NotifyError> {
        (**self).notify(reservation)
    }
}

/// The human-readable confirmation sent for an admitted reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationMessage {
    pub subject: String,
    pub body: String,
}

impl ConfirmationMessage {
    pub fn for_reservation(reservation: &Reservation) -> Self {
        let start = minutes_to_time(reservation.start_minute);
        let end = minutes_to_time(reservation.end_minute);
        Self {
            subject: format!("Reserva confirmada {} {}", reservation.date, start),
            body: format!(
                "Reservation {} confirmed with barber {} for service {} on {} from {} to {}.",
                reservation.id,
                reservation.barber_id,
                reservation.service_id,
                reservation.date.format("%Y-%m-%d"),
                start,
                end
            ),
        }
    }
}

/// Writes confirmations to the log instead of sending them anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, reservation: &Reservation) -> Result<(), NotifyError> {
        let message = ConfirmationMessage::for_reservation(reservation);
        info!(
            reservation_id = %reservation.id,
            subject = %message.subject,
            "{}",
            message.body
        );
        Ok(())
    }
}
