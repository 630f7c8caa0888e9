//! In-memory collaborators.
//!
//! [`InMemoryReservations`] performs its overlap check and insert under a
//! single lock, which gives the atomicity [`ReservationStore`] requires.

use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};
use parking_lot::Mutex;

use crate::conflict::overlaps;
use crate::error::{Result, SlotError, StoreError};
use crate::model::{
    BarberId, Reservation, ReservationStatus, Service, ServiceId, WorkingWindow,
};
use crate::store::{ReservationStore, ScheduleStore, ServiceCatalog};

/// Weekly working hours keyed by barber.
#[derive(Debug, Default, Clone)]
pub struct InMemorySchedule {
    windows: HashMap<BarberId, Vec<WorkingWindow>>,
}

impl InMemorySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a barber with no working hours yet.
    pub fn with_barber(mut self, barber_id: impl Into<BarberId>) -> Self {
        self.windows.entry(barber_id.into()).or_default();
        self
    }

    pub fn with_window(mut self, barber_id: impl Into<BarberId>, window: WorkingWindow) -> Self {
        self.windows.entry(barber_id.into()).or_default().push(window);
        self
    }
}

impl ScheduleStore for InMemorySchedule {
    fn working_windows(&self, barber_id: &str, weekday: Weekday) -> Result<Vec<WorkingWindow>> {
        let windows = self
            .windows
            .get(barber_id)
            .ok_or_else(|| SlotError::NotFound(format!("barber '{}'", barber_id)))?;
        Ok(windows
            .iter()
            .filter(|w| w.weekday == weekday)
            .copied()
            .collect())
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    services: HashMap<ServiceId, Service>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.insert(service.id.clone(), service);
        self
    }
}

impl ServiceCatalog for InMemoryCatalog {
    fn service(&self, service_id: &str) -> Result<Service> {
        self.services
            .get(service_id)
            .cloned()
            .ok_or_else(|| SlotError::NotFound(format!("service '{}'", service_id)))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryReservations {
    reservations: Mutex<Vec<Reservation>>,
}

impl InMemoryReservations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store without any overlap checking, e.g. with imported data.
    pub fn with_reservations(reservations: Vec<Reservation>) -> Self {
        Self {
            reservations: Mutex::new(reservations),
        }
    }

    /// Snapshot of every stored reservation in insertion order.
    pub fn all(&self) -> Vec<Reservation> {
        self.reservations.lock().clone()
    }
}

impl ReservationStore for InMemoryReservations {
    fn reservations(&self, barber_id: &str, date: NaiveDate) -> Result<Vec<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .iter()
            .filter(|r| r.barber_id == barber_id && r.date == date)
            .cloned()
            .collect())
    }

    fn insert_reservation(
        &self,
        reservation: Reservation,
    ) -> std::result::Result<Reservation, StoreError> {
        reservation
            .validate()
            .map_err(|err| StoreError::Invalid(err.to_string()))?;

        let mut stored = self.reservations.lock();

        if stored.iter().any(|r| r.id == reservation.id) {
            return Err(StoreError::Conflict(format!(
                "reservation id '{}' already exists",
                reservation.id
            )));
        }

        if reservation.occupies_time() {
            let clash = stored.iter().find(|r| {
                r.blocks(&reservation.barber_id, reservation.date)
                    && overlaps(
                        reservation.start_minute,
                        reservation.end_minute,
                        r.start_minute,
                        r.end_minute,
                    )
            });
            if let Some(existing) = clash {
                return Err(StoreError::Conflict(format!(
                    "overlaps reservation '{}'",
                    existing.id
                )));
            }
        }

        stored.push(reservation.clone());
        Ok(reservation)
    }

    fn set_status(&self, id: &str, status: ReservationStatus) -> Result<Reservation> {
        let mut stored = self.reservations.lock();
        let reservation = stored
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| SlotError::NotFound(format!("reservation '{}'", id)))?;

        if !reservation.status.can_transition_to(status) {
            return Err(SlotError::InvalidTransition {
                id: id.to_string(),
                from: reservation.status,
                to: status,
            });
        }

        reservation.status = status;
        Ok(reservation.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(id: &str, start: u32, end: u32) -> Reservation {
        Reservation {
            id: id.to_string(),
            barber_id: "b1".to_string(),
            service_id: "corte".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(),
            start_minute: start,
            end_minute: end,
            status: ReservationStatus::Booked,
        }
    }

    #[test]
    fn insert_refuses_overlap() {
        let store = InMemoryReservations::new();
        store.insert_reservation(booking("r1", 600, 630)).unwrap();
        let err = store.insert_reservation(booking("r2", 615, 645)).unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
        store.insert_reservation(booking("r3", 630, 660)).unwrap();
        assert_eq!(store.all().len(), 2);
    }

    #[test]
    fn cancelled_reservation_frees_time() {
        let store = InMemoryReservations::new();
        store.insert_reservation(booking("r1", 600, 630)).unwrap();
        store
            .set_status("r1", ReservationStatus::Cancelled)
            .unwrap();
        store.insert_reservation(booking("r2", 600, 630)).unwrap();
    }

    #[test]
    fn inverted_reservation_is_refused_as_invalid() {
        let store = InMemoryReservations::new();
        let err = store.insert_reservation(booking("r1", 630, 600)).unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
        assert!(!err.is_retryable());
        assert!(store.all().is_empty());
    }

    #[test]
    fn duplicate_id_is_a_conflict() {
        let store = InMemoryReservations::new();
        store.insert_reservation(booking("r1", 600, 630)).unwrap();
        let err = store.insert_reservation(booking("r1", 700, 730)).unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[test]
    fn terminal_status_cannot_change() {
        let store = InMemoryReservations::new();
        store.insert_reservation(booking("r1", 600, 630)).unwrap();
        store
            .set_status("r1", ReservationStatus::Completed)
            .unwrap();
        let err = store
            .set_status("r1", ReservationStatus::Cancelled)
            .unwrap_err();
        assert!(matches!(err, SlotError::InvalidTransition { .. }));
    }

    #[test]
    fn unknown_barber_is_not_found() {
        let schedule = InMemorySchedule::new().with_barber("b1");
        assert!(schedule.working_windows("b1", Weekday::Mon).unwrap().is_empty());
        assert!(matches!(
            schedule.working_windows("b2", Weekday::Mon),
            Err(SlotError::NotFound(_))
        ));
    }
}
