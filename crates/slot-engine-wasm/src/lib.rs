//! WASM bindings for slot-engine.
//!
//! Exposes slot listing, admission checks, free intervals and conflict audits
//! to the JavaScript frontend via `wasm-bindgen`. Complex values cross the
//! boundary as JSON strings using the same `"HH:mm"` field encoding as the
//! engine's serde types.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use slot_engine::{
    Conflict, EngineConfig, Reservation, Service, SlotRequest, WorkingWindow,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct SlotsInput {
    barber_id: String,
    date: NaiveDate,
    duration_minutes: u32,
    windows: Vec<WorkingWindow>,
    #[serde(default)]
    reservations: Vec<Reservation>,
    #[serde(default)]
    granularity_minutes: Option<u32>,
}

#[derive(Deserialize)]
struct AdmitInput {
    request: SlotRequest,
    service: Service,
    windows: Vec<WorkingWindow>,
    #[serde(default)]
    reservations: Vec<Reservation>,
}

#[derive(Deserialize)]
struct DayInput {
    barber_id: String,
    date: NaiveDate,
    windows: Vec<WorkingWindow>,
    #[serde(default)]
    reservations: Vec<Reservation>,
}

#[derive(Serialize)]
struct ConflictDto {
    first_id: String,
    second_id: String,
    barber_id: String,
    date: NaiveDate,
    overlap_minutes: u32,
}

impl From<&Conflict> for ConflictDto {
    fn from(c: &Conflict) -> Self {
        Self {
            first_id: c.first.id.clone(),
            second_id: c.second.id.clone(),
            barber_id: c.first.barber_id.clone(),
            date: c.first.date,
            overlap_minutes: c.overlap_minutes,
        }
    }
}

// ---------------------------------------------------------------------------
// JSON-level implementations (testable off-wasm)
// ---------------------------------------------------------------------------

fn parse<'a, T: Deserialize<'a>>(json: &'a str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn available_slots_json(json: &str) -> Result<String, String> {
    let input: SlotsInput = parse(json, "slots input")?;
    let granularity = input
        .granularity_minutes
        .unwrap_or(EngineConfig::default().granularity_minutes);

    let slots = slot_engine::compute_available_slots(
        &input.barber_id,
        input.date,
        input.duration_minutes,
        &input.windows,
        &input.reservations,
        granularity,
    )
    .map_err(|e| e.to_string())?;

    to_json(&slot_engine::format_slots(&slots))
}

fn admit_json(json: &str) -> Result<String, String> {
    let input: AdmitInput = parse(json, "admission input")?;
    let reservation = slot_engine::admit_reservation(
        &input.request,
        &input.service,
        &input.windows,
        &input.reservations,
    )
    .map_err(|e| e.to_string())?;
    to_json(&reservation)
}

fn free_intervals_json(json: &str) -> Result<String, String> {
    let input: DayInput = parse(json, "day input")?;
    let free = slot_engine::free_intervals(
        &input.barber_id,
        input.date,
        &input.windows,
        &input.reservations,
    )
    .map_err(|e| e.to_string())?;
    to_json(&free)
}

fn conflicts_json(json: &str) -> Result<String, String> {
    let reservations: Vec<Reservation> = parse(json, "reservations")?;
    let dtos: Vec<ConflictDto> = slot_engine::find_conflicts(&reservations)
        .iter()
        .map(ConflictDto::from)
        .collect();
    to_json(&dtos)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// List bookable start times.
///
/// Input: `{barber_id, date, duration_minutes, windows, reservations?,
/// granularity_minutes?}`. Returns a JSON array of `"HH:mm"` strings.
#[wasm_bindgen(js_name = "computeAvailableSlots")]
pub fn compute_available_slots(input_json: &str) -> Result<String, JsValue> {
    available_slots_json(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Check a reservation request.
///
/// Input: `{request, service, windows, reservations?}`. Returns the admitted
/// reservation as JSON, or throws the rejection reason.
#[wasm_bindgen(js_name = "admitReservation")]
pub fn admit_reservation(input_json: &str) -> Result<String, JsValue> {
    admit_json(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Free intervals inside working hours: `{barber_id, date, windows, reservations?}`
/// → `[{start, end, duration_minutes}]`.
#[wasm_bindgen(js_name = "freeIntervals")]
pub fn free_intervals(input_json: &str) -> Result<String, JsValue> {
    free_intervals_json(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Double-booking audit over a JSON array of reservations.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn find_conflicts(reservations_json: &str) -> Result<String, JsValue> {
    conflicts_json(reservations_json).map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen(js_name = "minutesToTime")]
pub fn minutes_to_time(minutes: u32) -> String {
    slot_engine::minutes_to_time(minutes)
}

#[wasm_bindgen(js_name = "timeToMinutes")]
pub fn time_to_minutes(time: &str) -> Result<u32, JsValue> {
    slot_engine::time_to_minutes(time).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOWS: &str = r#"[{"weekday":"Mon","start":"09:00","end":"10:00"}]"#;

    #[test]
    fn slots_roundtrip_through_json() {
        let input = format!(
            r#"{{"barber_id":"ana","date":"2026-03-16","duration_minutes":30,"windows":{}}}"#,
            WINDOWS
        );
        assert_eq!(
            available_slots_json(&input).unwrap(),
            r#"["09:00","09:15","09:30"]"#
        );
    }

    #[test]
    fn slots_honor_granularity_override() {
        let input = format!(
            r#"{{"barber_id":"ana","date":"2026-03-16","duration_minutes":30,"windows":{},"granularity_minutes":30}}"#,
            WINDOWS
        );
        assert_eq!(available_slots_json(&input).unwrap(), r#"["09:00","09:30"]"#);
    }

    #[test]
    fn admission_rejection_is_a_message() {
        let input = format!(
            r#"{{"request":{{"barber_id":"ana","date":"2026-03-16","service_id":"corte","start":"09:45"}},
                "service":{{"id":"corte","duration_minutes":30}},"windows":{}}}"#,
            WINDOWS
        );
        let err = admit_json(&input).unwrap_err();
        assert!(err.contains("outside working hours"), "{}", err);
    }

    #[test]
    fn admission_success_returns_reservation() {
        let input = format!(
            r#"{{"request":{{"barber_id":"ana","date":"2026-03-16","service_id":"corte","start":"09:30"}},
                "service":{{"id":"corte","duration_minutes":30}},"windows":{}}}"#,
            WINDOWS
        );
        let value: serde_json::Value = serde_json::from_str(&admit_json(&input).unwrap()).unwrap();
        assert_eq!(value["end"], "10:00");
        assert_eq!(value["status"], "RESERVADA");
    }

    #[test]
    fn free_intervals_serialize_hhmm() {
        let input = format!(
            r#"{{"barber_id":"ana","date":"2026-03-16","windows":{}}}"#,
            WINDOWS
        );
        assert_eq!(
            free_intervals_json(&input).unwrap(),
            r#"[{"start":"09:00","end":"10:00","duration_minutes":60}]"#
        );
    }

    #[test]
    fn conflicts_report_ids() {
        let input = r#"[
            {"id":"a","barber_id":"ana","service_id":"corte","date":"2026-03-16","start":"09:00","end":"09:30","status":"RESERVADA"},
            {"id":"b","barber_id":"ana","service_id":"corte","date":"2026-03-16","start":"09:15","end":"09:45","status":"RESERVADA"}
        ]"#;
        let value: serde_json::Value = serde_json::from_str(&conflicts_json(input).unwrap()).unwrap();
        assert_eq!(value[0]["first_id"], "a");
        assert_eq!(value[0]["second_id"], "b");
        assert_eq!(value[0]["overlap_minutes"], 15);
    }

    #[test]
    fn bad_json_is_reported() {
        assert!(available_slots_json("{").unwrap_err().starts_with("Invalid slots input JSON"));
    }
}
