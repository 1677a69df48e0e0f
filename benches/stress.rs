use std::time::{Duration, Instant};

use seatplan::config::LayoutConfig;
use seatplan::engine::Engine;
use seatplan::layout::SeatLayout;
use seatplan::model::Reservation;

const DAY: i64 = 24 * 60; // one service day in minutes

fn percentile(sorted: &[Duration], p: f64) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let idx = ((sorted.len() as f64) * p / 100.0) as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn print_latency(label: &str, latencies: &mut [Duration]) {
    if latencies.is_empty() {
        return;
    }
    latencies.sort();
    let total: Duration = latencies.iter().sum();
    let avg = total / latencies.len() as u32;
    println!("  {label}:");
    println!(
        "    n={}, avg={:.2}µs, p50={:.2}µs, p95={:.2}µs, p99={:.2}µs, max={:.2}µs",
        latencies.len(),
        avg.as_secs_f64() * 1e6,
        percentile(latencies, 50.0).as_secs_f64() * 1e6,
        percentile(latencies, 95.0).as_secs_f64() * 1e6,
        percentile(latencies, 99.0).as_secs_f64() * 1e6,
        latencies[latencies.len() - 1].as_secs_f64() * 1e6,
    );
}

/// Deterministic pseudo-random batch: arrivals spread over the day, parties of 1-6.
fn batch(n: i64, seed: u64) -> Vec<Reservation> {
    let mut state = seed;
    let mut next = |bound: u64| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) % bound) as i64
    };
    (0..n)
        .map(|id| {
            let received = next(n as u64);
            let start = next((DAY - 180) as u64);
            let duration = 30 + next(150);
            let party = 1 + next(6);
            Reservation::new(id, received, start, duration, party)
        })
        .collect()
}

fn run(label: &str, config: &LayoutConfig, n: i64) {
    let layout = SeatLayout::new(config).expect("valid layout");
    let mut reservations = batch(n, 0x5eed);
    seatplan::engine::sequence(&mut reservations);

    let mut engine = Engine::new(layout.clone());
    let mut seated_lat = Vec::new();
    let mut rejected_lat = Vec::new();
    let started = Instant::now();
    for r in &reservations {
        let t = Instant::now();
        let seated = engine.allocate(r).expect("valid reservation");
        let elapsed = t.elapsed();
        if seated.is_some() {
            seated_lat.push(elapsed);
        } else {
            rejected_lat.push(elapsed);
        }
    }
    let per_call = started.elapsed();

    let mut engine = Engine::new(layout);
    let t = Instant::now();
    let result = engine.run_batch(reservations).expect("valid batch");
    let whole = t.elapsed();

    println!(
        "\n{label}: {} seats / {} tables, {n} reservations",
        engine.layout().seat_count(),
        engine.layout().table_count()
    );
    println!(
        "  allocate loop: {:.2}ms, run_batch: {:.2}ms, seated {}/{}",
        per_call.as_secs_f64() * 1000.0,
        whole.as_secs_f64() * 1000.0,
        result.seated_count(),
        result.len()
    );
    print_latency("seated", &mut seated_lat);
    print_latency("not seated", &mut rejected_lat);
}

fn main() {
    println!("=== seatplan stress ===");
    run("default", &LayoutConfig::default(), 10_000);
    run(
        "dining room",
        &LayoutConfig::new(240, 6).expect("valid layout"),
        100_000,
    );
    run(
        "banquet hall",
        &LayoutConfig::new(200, 8).expect("valid layout"),
        100_000,
    );
}
