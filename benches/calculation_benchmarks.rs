//! Performance benchmarks for the vacation calculator.
//!
//! Covers the pure hour calculation, report building over growing vacation
//! lists, and the `/calculate` endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use gtb_vacations::api::{AppState, CalculationRequest, create_router};
use gtb_vacations::calculation::compute_hours;
use gtb_vacations::config::ConfigLoader;
use gtb_vacations::models::{ShiftType, TimeOfDay, VacationRecord};
use gtb_vacations::report::build_report;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/gtb").expect("Failed to load config");
    AppState::new(config)
}

fn time(s: &str) -> TimeOfDay {
    s.parse().expect("valid time")
}

/// Creates `count` vacations cycling through every shift type and a mix of
/// day, evening and overnight times.
fn create_vacations(count: usize) -> Vec<VacationRecord> {
    let slots = [
        ("18:45", "20:45"),
        ("12:30", "18:45"),
        ("18:15", "01:15"),
        ("21:00", "23:00"),
        ("20:00", "02:00"),
    ];

    ShiftType::ALL
        .iter()
        .cycle()
        .zip(slots.iter().cycle())
        .take(count)
        .map(|(shift_type, (start, end))| {
            VacationRecord::new(*shift_type, time(start), time(end), None)
        })
        .collect()
}

fn create_request_body(count: usize) -> String {
    let request = CalculationRequest {
        rates: None,
        vacations: create_vacations(count),
    };
    serde_json::to_string(&request).expect("Failed to create request")
}

/// Benchmark: hour breakdown for a single vacation.
fn bench_compute_hours(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_hours");

    for (name, start, end) in [
        ("short_day", "18:45", "20:45"),
        ("overnight", "18:15", "01:15"),
        ("full_day", "08:00", "08:00"),
    ] {
        let (start, end) = (time(start), time(end));
        group.bench_function(name, |b| {
            b.iter(|| compute_hours(black_box(start), black_box(end)))
        });
    }

    group.finish();
}

/// Benchmark: report building as the list grows.
fn bench_build_report(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/gtb").expect("Failed to load config");
    let rates = config.default_rates().clone();
    let today = NaiveDate::from_ymd_opt(2025, 10, 4).expect("valid date");

    let mut group = c.benchmark_group("build_report");

    for count in [1, 10, 50, 200] {
        let vacations = create_vacations(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("vacations", count), &vacations, |b, v| {
            b.iter(|| build_report(black_box(v), &rates, today).expect("report"))
        });
    }

    group.finish();
}

/// Benchmark: `/calculate` request through the router.
fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("calculate_endpoint");

    for count in [1, 10, 50] {
        let router = create_router(state.clone());
        let body = create_request_body(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("vacations", count), &count, |b, _| {
            b.to_async(&rt).iter(|| async {
                let router = router.clone();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
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

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_hours,
    bench_build_report,
    bench_calculate_endpoint,
);
criterion_main!(benches);
