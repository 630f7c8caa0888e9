//! Booking service: wires the collaborators around the pure engine.
//!
//! Every collaborator is handed in through [`BookingService::new`]; there is no
//! global registry. Admission reads the barber's current reservations, runs
//! [`admit_reservation`], and asks the store to insert the result. When the
//! store refuses the write the whole sequence is repeated, up to
//! [`EngineConfig::admission_retries`] extra times.

use chrono::{Datelike, NaiveDate};
use tracing::{info, warn};

use crate::admission::admit_reservation;
use crate::availability::compute_available_slots;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::freebusy::{self, FreeInterval};
use crate::model::{Reservation, ReservationStatus, SlotRequest};
use crate::notify::Notifier;
use crate::store::{ReservationStore, ScheduleStore, ServiceCatalog};

pub struct BookingService<S, R, C, N> {
    schedule: S,
    reservations: R,
    catalog: C,
    notifier: N,
    config: EngineConfig,
}

impl<S, R, C, N> BookingService<S, R, C, N>
where
    S: ScheduleStore,
    R: ReservationStore,
    C: ServiceCatalog,
    N: Notifier,
{
    pub fn new(
        schedule: S,
        reservations: R,
        catalog: C,
        notifier: N,
        config: EngineConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            schedule,
            reservations,
            catalog,
            notifier,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn reservation_store(&self) -> &R {
        &self.reservations
    }

    /// Bookable start minutes for `service_id` with `barber_id` on `date`.
    pub fn available_slots(
        &self,
        barber_id: &str,
        date: NaiveDate,
        service_id: &str,
    ) -> Result<Vec<u32>> {
        let service = self.catalog.service(service_id)?;
        let windows = self.schedule.working_windows(barber_id, date.weekday())?;
        let existing = self.reservations.reservations(barber_id, date)?;
        compute_available_slots(
            barber_id,
            date,
            service.duration_minutes,
            &windows,
            &existing,
            self.config.granularity_minutes,
        )
    }

    /// Gaps in the barber's working hours on `date`.
    pub fn free_intervals(&self, barber_id: &str, date: NaiveDate) -> Result<Vec<FreeInterval>> {
        let windows = self.schedule.working_windows(barber_id, date.weekday())?;
        let existing = self.reservations.reservations(barber_id, date)?;
        freebusy::free_intervals(barber_id, date, &windows, &existing)
    }

    /// Admit `request`, persisting and announcing the new reservation.
    ///
    /// Validation failures (`OutOfWindow`, `Overlap`, `NotFound`, ...) return
    /// immediately. A store write conflict triggers a fresh read and re-check;
    /// once retries are exhausted the last [`crate::StoreError`] is returned.
    /// A store that rejects the reservation as invalid is never retried.
    pub fn admit(&self, request: &SlotRequest) -> Result<Reservation> {
        let service = self.catalog.service(&request.service_id)?;
        let windows = self
            .schedule
            .working_windows(&request.barber_id, request.date.weekday())?;

        let mut attempt = 0;
        loop {
            let existing = self
                .reservations
                .reservations(&request.barber_id, request.date)?;
            let candidate = admit_reservation(request, &service, &windows, &existing)?;

            match self.reservations.insert_reservation(candidate) {
                Ok(stored) => {
                    info!(
                        reservation_id = %stored.id,
                        barber_id = %stored.barber_id,
                        date = %stored.date,
                        start = stored.start_minute,
                        end = stored.end_minute,
                        "reservation admitted"
                    );
                    self.announce(&stored);
                    return Ok(stored);
                }
                Err(err) if err.is_retryable() && attempt < self.config.admission_retries => {
                    attempt += 1;
                    warn!(
                        barber_id = %request.barber_id,
                        date = %request.date,
                        attempt,
                        error = %err,
                        "reservation insert refused, re-checking"
                    );
                }
                Err(err) => {
                    warn!(
                        barber_id = %request.barber_id,
                        date = %request.date,
                        error = %err,
                        "reservation insert refused, giving up"
                    );
                    return Err(err.into());
                }
            }
        }
    }

    pub fn cancel(&self, reservation_id: &str) -> Result<Reservation> {
        self.reservations
            .set_status(reservation_id, ReservationStatus::Cancelled)
    }

    pub fn complete(&self, reservation_id: &str) -> Result<Reservation> {
        self.reservations
            .set_status(reservation_id, ReservationStatus::Completed)
    }

    fn announce(&self, reservation: &Reservation) {
        if let Err(err) = self.notifier.notify(reservation) {
            warn!(
                reservation_id = %reservation.id,
                error = %err,
                "confirmation not sent"
            );
        }
    }
}
