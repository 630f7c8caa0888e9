use chrono::{NaiveDate, Weekday};
use criterion::{criterion_group, criterion_main, Criterion};
use slot_engine::{compute_available_slots, free_intervals, Reservation, ReservationStatus, WorkingWindow};
use std::hint::black_box;

/// A full Monday: two windows and a 30 minute booking at the top of every hour.
fn busy_day() -> (NaiveDate, Vec<WorkingWindow>, Vec<Reservation>) {
    let date = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
    let windows = vec![
        WorkingWindow::new(Weekday::Mon, 8 * 60, 13 * 60).unwrap(),
        WorkingWindow::new(Weekday::Mon, 14 * 60, 21 * 60).unwrap(),
    ];
    let reservations = (0..13)
        .map(|i| {
            let start = 8 * 60 + i * 60;
            Reservation {
                id: format!("r{}", i),
                barber_id: "ana".to_string(),
                service_id: "corte".to_string(),
                date,
                start_minute: start,
                end_minute: start + 30,
                status: ReservationStatus::Booked,
            }
        })
        .collect();
    (date, windows, reservations)
}

fn bench_slots(c: &mut Criterion) {
    let (date, windows, reservations) = busy_day();

    c.bench_function("compute_available_slots/busy_day_5min", |b| {
        b.iter(|| {
            compute_available_slots(
                black_box("ana"),
                date,
                black_box(30),
                black_box(&windows),
                black_box(&reservations),
                5,
            )
        })
    });

    c.bench_function("free_intervals/busy_day", |b| {
        b.iter(|| free_intervals(black_box("ana"), date, black_box(&windows), black_box(&reservations)))
    });
}

criterion_group!(benches, bench_slots);
criterion_main!(benches);
