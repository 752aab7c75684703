//! Performance benchmarks for the Timeclock Engine.
//!
//! This benchmark suite verifies that the aggregation layer meets
//! performance targets:
//! - Two weeks of events partitioned: < 100μs mean
//! - One year of events partitioned: < 5ms mean
//! - /periods request over the router: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Days, NaiveDate, NaiveDateTime};

use timeclock_engine::aggregation::{
    DAILY_OVERTIME_THRESHOLD_MINUTES, calculate_biweekly_periods, calculate_daily_summaries,
};
use timeclock_engine::api::{AppState, create_router};
use timeclock_engine::config::ConfigLoader;
use timeclock_engine::models::{ClockEvent, ClockEventType};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Generates one 9-hour clock-in/clock-out pair per day for `days` days,
/// starting Monday 2025-01-06.
fn generate_events(days: u64) -> Vec<ClockEvent> {
    let first = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let mut events = Vec::with_capacity(days as usize * 2);

    for i in 0..days {
        let date = first + Days::new(i);
        let clock_in = date.and_hms_opt(8, 0, 0).unwrap();
        let clock_out = date.and_hms_opt(17, 0, 0).unwrap();
        events.push(ClockEvent {
            id: format!("in_{:05}", i),
            event_type: ClockEventType::ClockIn,
            timestamp: clock_in,
            user_id: "drv_bench".to_string(),
            user_name: "Bench Driver".to_string(),
        });
        events.push(ClockEvent {
            id: format!("out_{:05}", i),
            event_type: ClockEventType::ClockOut,
            timestamp: clock_out,
            user_id: "drv_bench".to_string(),
            user_name: "Bench Driver".to_string(),
        });
    }

    events
}

fn bench_as_of(days: u64) -> NaiveDateTime {
    let first = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    (first + Days::new(days + 7)).and_hms_opt(12, 0, 0).unwrap()
}

/// Benchmark: partition two weeks of events into pay periods.
///
/// Target: < 100μs mean
fn bench_two_weeks(c: &mut Criterion) {
    let events = generate_events(14);
    let as_of = bench_as_of(14);

    c.bench_function("periods_two_weeks", |b| {
        b.iter(|| black_box(calculate_biweekly_periods(black_box(&events), as_of)))
    });
}

/// Benchmark: daily summaries over two weeks of events.
fn bench_daily_summaries(c: &mut Criterion) {
    let events = generate_events(14);

    c.bench_function("daily_summaries_two_weeks", |b| {
        b.iter(|| {
            black_box(calculate_daily_summaries(
                black_box(&events),
                DAILY_OVERTIME_THRESHOLD_MINUTES,
            ))
        })
    });
}

/// Benchmark: various history lengths to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for days in [14u64, 28, 90, 365].iter() {
        let events = generate_events(*days);
        let as_of = bench_as_of(*days);

        group.throughput(Throughput::Elements(events.len() as u64));
        group.bench_with_input(BenchmarkId::new("days", days), days, |b, _| {
            b.iter(|| black_box(calculate_biweekly_periods(black_box(&events), as_of)))
        });
    }

    group.finish();
}

/// Benchmark: /periods request over the router.
///
/// Target: < 1ms mean
fn bench_periods_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);

    let body = serde_json::json!({
        "events": generate_events(14),
        "as_of": bench_as_of(14)
    })
    .to_string();

    c.bench_function("periods_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/periods")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_two_weeks,
    bench_daily_summaries,
    bench_scaling,
    bench_periods_endpoint,
);
criterion_main!(benches);
